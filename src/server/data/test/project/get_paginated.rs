use super::*;

/// Tests listing projects with their sections grouped correctly.
///
/// Expected: Ok with each project carrying only its own sections
#[tokio::test]
async fn groups_sections_per_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_project_with_sections(db, 1).await?;
    let empty = factory::create_project(db).await?;
    let (third, _) = factory::helpers::create_project_with_sections(db, 3).await?;

    let repo = ProjectRepository::new(db);
    let projects = repo.get_paginated(0, 100).await?;

    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].id, first.id);
    assert_eq!(projects[0].sections.len(), 1);
    assert_eq!(projects[1].id, empty.id);
    assert!(projects[1].sections.is_empty());
    assert_eq!(projects[2].id, third.id);
    assert_eq!(projects[2].sections.len(), 3);

    Ok(())
}

/// Tests listing with a limit of zero.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn zero_limit_returns_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);

    assert!(repo.get_paginated(0, 0).await?.is_empty());

    Ok(())
}
