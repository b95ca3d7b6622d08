use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::product::{CreateProductParams, UpdateProductParams},
        service::product::ProductService,
        state::AppState,
    },
};

pub static PRODUCT_TAG: &str = "product";

fn not_found() -> AppError {
    AppError::NotFound("Product not found".to_string())
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 200, description = "Product created", body = ProductDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.history_db);

    let product = service
        .create(CreateProductParams::from_dto(payload))
        .await?;

    Ok(Json(product.into_dto()))
}

/// List products.
#[utoipa::path(
    get,
    path = "/products",
    tag = PRODUCT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Products in id order", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.history_db);

    let products = service.list(params.skip, params.limit).await?;

    Ok(Json(
        products.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a product by id.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.history_db);

    let product = service.get(id).await?.ok_or_else(not_found)?;

    Ok(Json(product.into_dto()))
}

/// Partially update a product.
///
/// Only fields present and non-null in the body are changed. Served for both
/// `PUT` and `PATCH`.
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.history_db);

    let product = service
        .update(id, UpdateProductParams::from_dto(payload))
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(product.into_dto()))
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.history_db);

    service.delete(id).await?.ok_or_else(not_found)?;

    Ok(Json(MessageDto::new("Product deleted successfully")))
}
