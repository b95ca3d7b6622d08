use super::*;

/// Tests updating a project's status.
///
/// Verifies that sections are still attached to the returned project.
///
/// Expected: Ok(Some) with new status and existing sections
#[tokio::test]
async fn updates_status_and_keeps_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, _) = factory::helpers::create_project_with_sections(db, 2).await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(
            project.id,
            UpdateProjectParams {
                status: Some("completed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status.as_deref(), Some("completed"));
    assert_eq!(updated.name, project.name);
    assert_eq!(updated.sections.len(), 2);
    assert!(updated.updated_at.is_some());

    Ok(())
}
