use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        project::{
            CreateProjectDto, CreateProjectSectionDto, ProjectDto, ProjectSectionDto,
            UpdateProjectDto, UpdateProjectSectionDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::project::{
            CreateProjectParams, CreateProjectSectionParams, UpdateProjectParams,
            UpdateProjectSectionParams,
        },
        service::project::{ProjectService, PROJECT_NOT_FOUND},
        state::AppState,
    },
};

/// Tag for grouping project and section endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

const SECTION_NOT_FOUND: &str = "Project section not found";

/// Query for the cross-project section listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SectionListParams {
    /// Restrict results to this project.
    pub project_id: Option<i32>,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

fn project_not_found() -> AppError {
    AppError::NotFound(PROJECT_NOT_FOUND.to_string())
}

fn section_not_found() -> AppError {
    AppError::NotFound(SECTION_NOT_FOUND.to_string())
}

/// Create a project.
///
/// A missing `status` defaults to `"upcoming"`. The new project has no sections.
///
/// # Returns
/// - `200 OK` - Created project with empty `sections`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 200, description = "Project created", body = ProjectDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let project = service
        .create(CreateProjectParams::from_dto(payload))
        .await?;

    Ok(Json(project.into_dto()))
}

/// List projects, each with its sections.
#[utoipa::path(
    get,
    path = "/projects",
    tag = PROJECT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Projects in id order", body = Vec<ProjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let projects = service.list(params.skip, params.limit).await?;

    Ok(Json(
        projects.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a project with its sections.
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project found", body = ProjectDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let project = service.get(id).await?.ok_or_else(project_not_found)?;

    Ok(Json(project.into_dto()))
}

/// Partially update a project. Served for both `PUT` and `PATCH`.
#[utoipa::path(
    patch,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project id")),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let project = service
        .update(id, UpdateProjectParams::from_dto(payload))
        .await?
        .ok_or_else(project_not_found)?;

    Ok(Json(project.into_dto()))
}

/// Delete a project that has no sections left.
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted", body = MessageDto),
        (status = 400, description = "Project still has sections", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    service.delete(id).await?.ok_or_else(project_not_found)?;

    Ok(Json(MessageDto::new("Project deleted successfully")))
}

/// Add a section to a project.
///
/// # Returns
/// - `200 OK` - Created section
/// - `404 Not Found` - Project does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/projects/{id}/sections",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Parent project id")),
    request_body = CreateProjectSectionDto,
    responses(
        (status = 200, description = "Section created", body = ProjectSectionDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_section(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
    Json(payload): Json<CreateProjectSectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let section = service
        .create_section(CreateProjectSectionParams::from_dto(project_id, payload))
        .await?;

    Ok(Json(section.into_dto()))
}

/// List the sections of one project.
#[utoipa::path(
    get,
    path = "/projects/{id}/sections",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Parent project id"), PaginationParams),
    responses(
        (status = 200, description = "Sections in id order", body = Vec<ProjectSectionDto>),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_project_sections(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let sections = service
        .list_sections_for(project_id, params.skip, params.limit)
        .await?;

    Ok(Json(
        sections.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>(),
    ))
}

/// List sections across all projects.
#[utoipa::path(
    get,
    path = "/projects/sections",
    tag = PROJECT_TAG,
    params(SectionListParams),
    responses(
        (status = 200, description = "Sections in id order", body = Vec<ProjectSectionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sections(
    State(state): State<AppState>,
    Query(params): Query<SectionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let sections = service
        .list_sections(params.project_id, params.skip, params.limit)
        .await?;

    Ok(Json(
        sections.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/projects/sections/{section_id}",
    tag = PROJECT_TAG,
    params(("section_id" = i32, Path, description = "Section id")),
    responses(
        (status = 200, description = "Section found", body = ProjectSectionDto),
        (status = 404, description = "Project section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_section(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let section = service
        .get_section(section_id)
        .await?
        .ok_or_else(section_not_found)?;

    Ok(Json(section.into_dto()))
}

/// Partially update a section. Served for both `PUT` and `PATCH`.
#[utoipa::path(
    patch,
    path = "/projects/sections/{section_id}",
    tag = PROJECT_TAG,
    params(("section_id" = i32, Path, description = "Section id")),
    request_body = UpdateProjectSectionDto,
    responses(
        (status = 200, description = "Section updated", body = ProjectSectionDto),
        (status = 404, description = "Project section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_section(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
    Json(payload): Json<UpdateProjectSectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let section = service
        .update_section(section_id, UpdateProjectSectionParams::from_dto(payload))
        .await?
        .ok_or_else(section_not_found)?;

    Ok(Json(section.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/projects/sections/{section_id}",
    tag = PROJECT_TAG,
    params(("section_id" = i32, Path, description = "Section id")),
    responses(
        (status = 200, description = "Section deleted", body = MessageDto),
        (status = 404, description = "Project section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_section(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    service
        .delete_section(section_id)
        .await?
        .ok_or_else(section_not_found)?;

    Ok(Json(MessageDto::new("Project section deleted successfully")))
}
