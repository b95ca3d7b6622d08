use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::event::{CreateEventParams, UpdateEventParams},
        service::event::EventService,
        state::AppState,
    },
};

pub static EVENT_TAG: &str = "event";

fn not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}

#[utoipa::path(
    post,
    path = "/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 200, description = "Event created", body = EventDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let event = service.create(CreateEventParams::from_dto(payload)).await?;

    Ok(Json(event.into_dto()))
}

#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Events in id order", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let events = service.list(params.skip, params.limit).await?;

    Ok(Json(
        events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event found", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let event = service.get(id).await?.ok_or_else(not_found)?;

    Ok(Json(event.into_dto()))
}

/// Partially update an event. Served for both `PUT` and `PATCH`.
#[utoipa::path(
    patch,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let event = service
        .update(id, UpdateEventParams::from_dto(payload))
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(event.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = MessageDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    service.delete(id).await?.ok_or_else(not_found)?;

    Ok(Json(MessageDto::new("Event deleted successfully")))
}
