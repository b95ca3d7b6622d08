use super::*;

/// Tests deleting a product.
///
/// Verifies that the removed product is returned and the row is gone.
///
/// Expected: Ok(Some) then not found
#[tokio::test]
async fn deletes_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_history_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.history_db.as_ref().unwrap();

    let created = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let deleted = repo.delete(created.id).await?.unwrap();

    assert_eq!(deleted.id, created.id);
    assert!(repo.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_history_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.history_db.as_ref().unwrap();

    let repo = ProductRepository::new(db);

    assert!(repo.delete(42).await?.is_none());

    Ok(())
}
