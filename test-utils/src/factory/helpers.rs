//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique names and
/// emails across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a project with the given number of sections attached.
///
/// # Arguments
/// - `db` - Primary database connection
/// - `section_count` - Number of sections to create under the project
///
/// # Returns
/// - `Ok((project, sections))` - The project and its sections in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_project_with_sections(
    db: &DatabaseConnection,
    section_count: usize,
) -> Result<
    (
        entity::project::Model,
        Vec<entity::project_section::Model>,
    ),
    DbErr,
> {
    let project = crate::factory::project::create_project(db).await?;

    let mut sections = Vec::with_capacity(section_count);
    for _ in 0..section_count {
        sections.push(crate::factory::project_section::create_section(db, project.id).await?);
    }

    Ok((project, sections))
}
