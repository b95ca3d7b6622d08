//! Project and project section domain models and parameters.
//!
//! A project is always handed out together with its sections. The repository loads
//! them with an explicit second query; nothing here loads lazily.

use chrono::{DateTime, Utc};

use crate::model::project::{
    CreateProjectDto, CreateProjectSectionDto, ProjectDto, ProjectSectionDto, UpdateProjectDto,
    UpdateProjectSectionDto,
};

/// Status given to projects created without one.
pub const DEFAULT_PROJECT_STATUS: &str = "upcoming";

/// Project with its sections in primary-key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub main_image_url: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub sections: Vec<ProjectSection>,
}

impl Project {
    /// Builds a project from its entity and already-fetched section entities.
    pub fn from_entity(
        entity: entity::project::Model,
        sections: Vec<entity::project_section::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            overview: entity.overview,
            main_image_url: entity.main_image_url,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            sections: sections
                .into_iter()
                .map(ProjectSection::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            name: self.name,
            description: self.description,
            overview: self.overview,
            main_image_url: self.main_image_url,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            sections: self
                .sections
                .into_iter()
                .map(ProjectSection::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub name: String,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub main_image_url: Option<String>,
    pub status: Option<String>,
}

impl CreateProjectParams {
    /// Converts the DTO, substituting [`DEFAULT_PROJECT_STATUS`] for a missing status.
    pub fn from_dto(dto: CreateProjectDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            overview: dto.overview,
            main_image_url: dto.main_image_url,
            status: dto
                .status
                .or_else(|| Some(DEFAULT_PROJECT_STATUS.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub main_image_url: Option<String>,
    pub status: Option<String>,
}

impl UpdateProjectParams {
    pub fn from_dto(dto: UpdateProjectDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            overview: dto.overview,
            main_image_url: dto.main_image_url,
            status: dto.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSection {
    pub id: i32,
    pub project_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub main_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProjectSection {
    pub fn from_entity(entity: entity::project_section::Model) -> Self {
        Self {
            id: entity.id,
            project_id: entity.project_id,
            title: entity.title,
            description: entity.description,
            details: entity.details,
            main_image_url: entity.main_image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProjectSectionDto {
        ProjectSectionDto {
            id: self.id,
            project_id: self.project_id,
            title: self.title,
            description: self.description,
            details: self.details,
            main_image_url: self.main_image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProjectSectionParams {
    pub project_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub main_image_url: Option<String>,
}

impl CreateProjectSectionParams {
    /// Converts the DTO; `project_id` comes from the request path.
    pub fn from_dto(project_id: i32, dto: CreateProjectSectionDto) -> Self {
        Self {
            project_id,
            title: dto.title,
            description: dto.description,
            details: dto.details,
            main_image_url: dto.main_image_url,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectSectionParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub main_image_url: Option<String>,
}

impl UpdateProjectSectionParams {
    pub fn from_dto(dto: UpdateProjectSectionDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            details: dto.details,
            main_image_url: dto.main_image_url,
        }
    }
}
