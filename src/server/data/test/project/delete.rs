use super::*;
use sea_orm::SqlErr;

/// Tests deleting a project that has no sections.
///
/// Expected: Ok(Some) and the project is gone
#[tokio::test]
async fn deletes_project_without_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    let deleted = repo.delete(project.id).await?.unwrap();

    assert_eq!(deleted.id, project.id);
    assert!(deleted.sections.is_empty());
    assert!(!repo.exists(project.id).await?);

    Ok(())
}

/// Tests deleting a project that still has sections.
///
/// Verifies that the foreign key refuses the delete and that neither the project
/// nor its sections are removed.
///
/// Expected: Err(ForeignKeyConstraintViolation) and all rows kept
#[tokio::test]
async fn refuses_to_delete_project_with_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, _) = factory::helpers::create_project_with_sections(db, 2).await?;

    let repo = ProjectRepository::new(db);
    let err = repo.delete(project.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(repo.exists(project.id).await?);

    let remaining = entity::prelude::ProjectSection::find().count(db).await?;
    assert_eq!(remaining, 2);

    Ok(())
}

/// Tests deleting a missing project.
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

    assert!(repo.delete(42).await?.is_none());

    Ok(())
}
