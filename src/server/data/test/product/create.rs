use super::*;

/// Tests creating a product in the history store.
///
/// Expected: Ok with created product persisted
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_history_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.history_db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(CreateProductParams {
            name: "Solar Panel".to_string(),
            description: Some("300W monocrystalline".to_string()),
            price: 249.5,
            image: None,
            in_stock: true,
        })
        .await?;

    assert_eq!(product.name, "Solar Panel");
    assert_eq!(product.price, 249.5);
    assert!(product.in_stock);

    let db_product = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_product.description.as_deref(), Some("300W monocrystalline"));

    Ok(())
}
