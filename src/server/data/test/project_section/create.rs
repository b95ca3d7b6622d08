use super::*;

/// Tests creating a section under an existing project.
///
/// Expected: Ok with section linked to the project
#[tokio::test]
async fn creates_section() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;

    let repo = ProjectSectionRepository::new(db);
    let section = repo
        .create(CreateProjectSectionParams {
            project_id: project.id,
            title: "Phase 1".to_string(),
            description: None,
            details: Some("Site survey".to_string()),
            main_image_url: None,
        })
        .await?;

    assert_eq!(section.project_id, project.id);
    assert_eq!(section.title, "Phase 1");

    Ok(())
}

/// Tests creating a section for a project that does not exist.
///
/// Verifies that the foreign key rejects the orphan row.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectSectionRepository::new(db);
    let result = repo
        .create(CreateProjectSectionParams {
            project_id: 999,
            title: "Orphan".to_string(),
            description: None,
            details: None,
            main_image_url: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
