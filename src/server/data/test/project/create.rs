use super::*;

/// Tests creating a project.
///
/// Expected: Ok with project and no sections
#[tokio::test]
async fn creates_project_without_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(CreateProjectParams {
            name: "Solar Grid".to_string(),
            description: None,
            overview: Some("Community microgrid".to_string()),
            main_image_url: None,
            status: Some("upcoming".to_string()),
        })
        .await?;

    assert_eq!(project.name, "Solar Grid");
    assert_eq!(project.status.as_deref(), Some("upcoming"));
    assert!(project.sections.is_empty());

    Ok(())
}
