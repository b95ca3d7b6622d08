use super::*;

/// Tests updating an order's quantity and total.
///
/// Verifies that `order_date` is not touched by an update.
///
/// Expected: Ok(Some) with new quantity and original order_date
#[tokio::test]
async fn updates_quantity_and_keeps_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_history_table(entity::prelude::OrderHistory)
        .build()
        .await
        .unwrap();
    let db = test.history_db.as_ref().unwrap();

    let created = factory::create_order(db).await?;

    let repo = OrderHistoryRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateOrderHistoryParams {
                quantity: Some(5),
                total_amount: Some(99.95),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.total_amount, 99.95);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.order_date, created.order_date);

    Ok(())
}

/// Tests an update that provides no fields.
///
/// Expected: Ok(Some) with the order unchanged
#[tokio::test]
async fn empty_update_returns_current_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_history_table(entity::prelude::OrderHistory)
        .build()
        .await
        .unwrap();
    let db = test.history_db.as_ref().unwrap();

    let created = factory::create_order(db).await?;

    let repo = OrderHistoryRepository::new(db);
    let updated = repo
        .update(created.id, UpdateOrderHistoryParams::default())
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.quantity, created.quantity);

    Ok(())
}
