use super::*;

/// Tests skip and limit windowing over users.
///
/// Expected: Ok with the requested window in id order
#[tokio::test]
async fn returns_requested_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_user(db).await?.id);
    }

    let repo = UserRepository::new(db);
    let page = repo.get_paginated(1, 2).await?;

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, ids[1]);
    assert_eq!(page[1].id, ids[2]);

    Ok(())
}

/// Tests skipping past the end of the table.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let page = repo.get_paginated(10, 100).await?;

    assert!(page.is_empty());

    Ok(())
}
