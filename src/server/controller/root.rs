use axum::{response::IntoResponse, Json};

use crate::model::api::MessageDto;

pub static ROOT_TAG: &str = "root";

/// Liveness message.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "API is running", body = MessageDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    Json(MessageDto::new("IIEC API is running!"))
}
