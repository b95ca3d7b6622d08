//! Project factory for creating test project entities.

use crate::{factory::helpers::next_id, fixture};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// Default values are sourced from the project fixture.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::project::ProjectFactory;
///
/// let project = ProjectFactory::new(&db)
///     .name("Solar Grid")
///     .status(Some("ongoing".to_string()))
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::project::Model,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with defaults from `fixture::project`.
    ///
    /// # Arguments
    /// - `db` - Primary database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::project::entity_builder()
            .name(format!("Project {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    pub fn status(mut self, status: Option<String>) -> Self {
        self.entity.status = status;
        self
    }

    /// Builds and inserts the project entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::project::Model)` - Created project entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            overview: ActiveValue::Set(self.entity.overview),
            main_image_url: ActiveValue::Set(self.entity.main_image_url),
            status: ActiveValue::Set(self.entity.status),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values.
pub async fn create_project(db: &DatabaseConnection) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db).build().await
}
