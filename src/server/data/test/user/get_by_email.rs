use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) with matching user
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("grace@example.com")
        .name("Grace")
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.get_by_email("grace@example.com").await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Grace");

    Ok(())
}

/// Tests looking up an email nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.get_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
