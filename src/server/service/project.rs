//! Project and section service.
//!
//! Sections can only exist under an existing project. Section operations addressed
//! through a project id check the parent first and report a missing parent as
//! `AppError::NotFound`.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{project::ProjectRepository, project_section::ProjectSectionRepository},
    error::AppError,
    model::project::{
        CreateProjectParams, CreateProjectSectionParams, Project, ProjectSection,
        UpdateProjectParams, UpdateProjectSectionParams,
    },
};

pub const PROJECT_NOT_FOUND: &str = "Project not found";
pub const PROJECT_HAS_SECTIONS: &str = "Project still has sections";

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a project with no sections
    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, AppError> {
        Ok(ProjectRepository::new(self.db).create(params).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Project>, AppError> {
        Ok(ProjectRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Project>, AppError> {
        Ok(ProjectRepository::new(self.db)
            .get_paginated(skip, limit)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateProjectParams,
    ) -> Result<Option<Project>, AppError> {
        Ok(ProjectRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a project that has no sections.
    ///
    /// Sections are left untouched. A project that still owns sections is refused,
    /// whether that is seen up front or reported by the foreign key on delete.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - Deleted project
    /// - `Ok(None)` - No project with that id
    /// - `Err(AppError::Conflict)` - Project still has sections
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<Option<Project>, AppError> {
        let repo = ProjectRepository::new(self.db);

        let Some(project) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        if !project.sections.is_empty() {
            return Err(AppError::Conflict(PROJECT_HAS_SECTIONS.to_string()));
        }

        let deleted = repo.delete(id).await.map_err(map_foreign_key_violation)?;

        if deleted.is_some() {
            tracing::debug!("Deleted project {}", id);
        }

        Ok(deleted)
    }

    /// Adds a section to an existing project.
    ///
    /// # Returns
    /// - `Ok(ProjectSection)` - Created section
    /// - `Err(AppError::NotFound)` - Parent project does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_section(
        &self,
        params: CreateProjectSectionParams,
    ) -> Result<ProjectSection, AppError> {
        self.require_project(params.project_id).await?;

        Ok(ProjectSectionRepository::new(self.db)
            .create(params)
            .await?)
    }

    /// Lists sections of one existing project.
    ///
    /// # Returns
    /// - `Ok(Vec<ProjectSection>)` - Sections in id order, possibly empty
    /// - `Err(AppError::NotFound)` - Project does not exist
    pub async fn list_sections_for(
        &self,
        project_id: i32,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<ProjectSection>, AppError> {
        self.require_project(project_id).await?;

        Ok(ProjectSectionRepository::new(self.db)
            .get_paginated(Some(project_id), skip, limit)
            .await?)
    }

    /// Lists sections across all projects, optionally filtered by project id.
    ///
    /// An unknown project id yields an empty list rather than an error.
    pub async fn list_sections(
        &self,
        project_id: Option<i32>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<ProjectSection>, AppError> {
        Ok(ProjectSectionRepository::new(self.db)
            .get_paginated(project_id, skip, limit)
            .await?)
    }

    pub async fn get_section(&self, id: i32) -> Result<Option<ProjectSection>, AppError> {
        Ok(ProjectSectionRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update_section(
        &self,
        id: i32,
        params: UpdateProjectSectionParams,
    ) -> Result<Option<ProjectSection>, AppError> {
        Ok(ProjectSectionRepository::new(self.db)
            .update(id, params)
            .await?)
    }

    pub async fn delete_section(&self, id: i32) -> Result<Option<ProjectSection>, AppError> {
        Ok(ProjectSectionRepository::new(self.db).delete(id).await?)
    }

    async fn require_project(&self, project_id: i32) -> Result<(), AppError> {
        if ProjectRepository::new(self.db).exists(project_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(PROJECT_NOT_FOUND.to_string()))
        }
    }
}

fn map_foreign_key_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            AppError::Conflict(PROJECT_HAS_SECTIONS.to_string())
        }
        _ => AppError::DbErr(err),
    }
}
