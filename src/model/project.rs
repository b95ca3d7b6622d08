use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub main_image_url: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub sections: Vec<ProjectSectionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateProjectDto {
    pub name: String,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub main_image_url: Option<String>,
    /// Defaults to `"upcoming"` when omitted.
    pub status: Option<String>,
}

/// Partial update: omitted or null fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateProjectDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub main_image_url: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProjectSectionDto {
    pub id: i32,
    pub project_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub main_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Section body; the parent project comes from the request path.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateProjectSectionDto {
    pub title: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub main_image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateProjectSectionDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub main_image_url: Option<String>,
}
