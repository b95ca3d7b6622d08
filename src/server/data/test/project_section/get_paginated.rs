use super::*;

/// Tests listing sections filtered by project.
///
/// Expected: Ok with only the matching project's sections
#[tokio::test]
async fn filters_by_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .with_table(entity::prelude::ProjectSection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_project_with_sections(db, 2).await?;
    factory::helpers::create_project_with_sections(db, 3).await?;

    let repo = ProjectSectionRepository::new(db);
    let filtered = repo.get_paginated(Some(first.id), 0, 100).await?;
    let all = repo.get_paginated(None, 0, 100).await?;

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|s| s.project_id == first.id));
    assert_eq!(all.len(), 5);

    Ok(())
}
