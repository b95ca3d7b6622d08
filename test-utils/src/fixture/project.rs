//! Project fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating project entity models without database
//! insertion, giving factories and unit tests consistent default values.

use chrono::{TimeZone, Utc};
use entity::project;

/// Default test project name.
pub const DEFAULT_NAME: &str = "Test Project";

/// Default project status.
pub const DEFAULT_STATUS: &str = "upcoming";

/// Creates a project entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Project"`
/// - description / overview / main_image_url: `None`
/// - status: `Some("upcoming")`
/// - created_at: `2025-01-01T00:00:00Z`
/// - updated_at: `None`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let project = fixture::project::entity();
/// assert_eq!(project.name, "Test Project");
/// ```
pub fn entity() -> project::Model {
    entity_builder().build()
}

/// Creates a project entity builder for customization.
pub fn entity_builder() -> ProjectEntityBuilder {
    ProjectEntityBuilder::default()
}

/// Builder for creating customized project entity models.
pub struct ProjectEntityBuilder {
    entity: project::Model,
}

impl Default for ProjectEntityBuilder {
    fn default() -> Self {
        Self {
            entity: project::Model {
                id: 1,
                name: DEFAULT_NAME.to_string(),
                description: None,
                overview: None,
                main_image_url: None,
                status: Some(DEFAULT_STATUS.to_string()),
                created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
                updated_at: None,
            },
        }
    }
}

impl ProjectEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
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

    pub fn build(self) -> project::Model {
        self.entity
    }
}
