use super::*;

/// Tests fetching a project together with its sections.
///
/// Verifies that only the project's own sections are attached, in id order.
///
/// Expected: Ok(Some) with two sections
#[tokio::test]
async fn returns_project_with_own_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, sections) = factory::helpers::create_project_with_sections(db, 2).await?;
    factory::helpers::create_project_with_sections(db, 3).await?;

    let repo = ProjectRepository::new(db);
    let found = repo.get_by_id(project.id).await?.unwrap();

    let section_ids: Vec<i32> = found.sections.iter().map(|s| s.id).collect();
    assert_eq!(section_ids, vec![sections[0].id, sections[1].id]);
    assert!(found.sections.iter().all(|s| s.project_id == project.id));

    Ok(())
}

/// Tests fetching a missing project.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    assert!(repo.get_by_id(1).await?.is_none());

    Ok(())
}
