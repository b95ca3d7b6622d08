//! Project section factory for creating test section entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test project sections.
///
/// The parent project must already exist; SQLite enforces the foreign key.
pub struct ProjectSectionFactory<'a> {
    db: &'a DatabaseConnection,
    project_id: i32,
    title: String,
    description: Option<String>,
    details: Option<String>,
}

impl<'a> ProjectSectionFactory<'a> {
    /// Creates a new ProjectSectionFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Section {id}"`
    /// - description: `None`
    /// - details: `None`
    ///
    /// # Arguments
    /// - `db` - Primary database connection
    /// - `project_id` - ID of the parent project
    pub fn new(db: &'a DatabaseConnection, project_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            project_id,
            title: format!("Section {}", id),
            description: None,
            details: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }

    /// Builds and inserts the section entity into the database.
    pub async fn build(self) -> Result<entity::project_section::Model, DbErr> {
        entity::project_section::ActiveModel {
            project_id: ActiveValue::Set(self.project_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            details: ActiveValue::Set(self.details),
            main_image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a section with default values under the given project.
pub async fn create_section(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<entity::project_section::Model, DbErr> {
    ProjectSectionFactory::new(db, project_id).build().await
}
