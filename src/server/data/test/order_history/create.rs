use super::*;

/// Tests recording an order.
///
/// Verifies that `order_date` is stamped by the repository.
///
/// Expected: Ok with order_date close to now
#[tokio::test]
async fn creates_order_with_current_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_history_table(entity::prelude::OrderHistory)
        .build()
        .await
        .unwrap();
    let db = test.history_db.as_ref().unwrap();

    let before = Utc::now();
    let repo = OrderHistoryRepository::new(db);
    let order = repo
        .create(CreateOrderHistoryParams {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            contact: "+15550100".to_string(),
            product_title: "Solar Panel".to_string(),
            quantity: 2,
            total_amount: 499.0,
        })
        .await?;

    assert_eq!(order.quantity, 2);
    assert_eq!(order.total_amount, 499.0);
    assert!(order.order_date >= before - Duration::seconds(1));

    Ok(())
}
