use super::*;

/// Tests listing products with a limit.
///
/// Expected: Ok with first `limit` products in id order
#[tokio::test]
async fn limits_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_history_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.history_db.as_ref().unwrap();

    let first = factory::create_product(db).await?;
    let second = factory::create_product(db).await?;
    factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let page = repo.get_paginated(0, 2).await?;

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, first.id);
    assert_eq!(page[1].id, second.id);

    Ok(())
}
