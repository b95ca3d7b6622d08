use super::*;

/// Tests a partial update touching only the price.
///
/// Verifies that fields left as `None` keep their stored values and that
/// `updated_at` is set.
///
/// Expected: Ok(Some) with only price changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_history_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.history_db.as_ref().unwrap();

    let created = factory::product::ProductFactory::new(db)
        .name("Inverter")
        .price(100.0)
        .in_stock(false)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateProductParams {
                price: Some(120.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Inverter");
    assert_eq!(updated.price, 120.0);
    assert!(!updated.in_stock);
    assert!(updated.updated_at.is_some());

    Ok(())
}

/// Tests updating a product that does not exist.
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
    let result = repo
        .update(
            999,
            UpdateProductParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
