use super::*;

/// Tests creating a user.
///
/// Verifies that the repository inserts the row with the given hash and stamps
/// `created_at` while leaving `updated_at` empty.
///
/// Expected: Ok with created user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.password_hash, "hash");
    assert!(user.updated_at.is_none());

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests inserting a second user with an existing email.
///
/// Verifies that the unique index on `email` rejects the insert.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            email: existing.email,
            name: "Someone Else".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
