use super::*;

/// Tests updating a section's title.
///
/// Expected: Ok(Some) with new title and same parent project
#[tokio::test]
async fn updates_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let section = factory::create_section(db, project.id).await?;

    let repo = ProjectSectionRepository::new(db);
    let updated = repo
        .update(
            section.id,
            UpdateProjectSectionParams {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.project_id, project.id);
    assert_eq!(updated.details, section.details);

    Ok(())
}
