use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderHistoryDto, OrderHistoryDto, UpdateOrderHistoryDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::order::{CreateOrderHistoryParams, UpdateOrderHistoryParams},
        service::order::OrderService,
        state::AppState,
    },
};

pub static ORDER_TAG: &str = "order";

fn not_found() -> AppError {
    AppError::NotFound("Order not found".to_string())
}

/// Record an order.
///
/// `order_date` is assigned by the server.
#[utoipa::path(
    post,
    path = "/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderHistoryDto,
    responses(
        (status = 200, description = "Order recorded", body = OrderHistoryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderHistoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.history_db);

    let order = service
        .create(CreateOrderHistoryParams::from_dto(payload))
        .await?;

    Ok(Json(order.into_dto()))
}

/// List orders, newest first.
#[utoipa::path(
    get,
    path = "/orders",
    tag = ORDER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Orders by descending order date", body = Vec<OrderHistoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.history_db);

    let orders = service.list(params.skip, params.limit).await?;

    Ok(Json(
        orders.into_iter().map(|o| o.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderHistoryDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.history_db);

    let order = service.get(id).await?.ok_or_else(not_found)?;

    Ok(Json(order.into_dto()))
}

#[utoipa::path(
    patch,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order id")),
    request_body = UpdateOrderHistoryDto,
    responses(
        (status = 200, description = "Order updated", body = OrderHistoryDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderHistoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.history_db);

    let order = service
        .update(id, UpdateOrderHistoryParams::from_dto(payload))
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(order.into_dto()))
}

/// Delete an order. Responds with an empty body.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.history_db);

    service.delete(id).await?.ok_or_else(not_found)?;

    Ok(StatusCode::NO_CONTENT)
}
