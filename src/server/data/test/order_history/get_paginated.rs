use super::*;

/// Tests that orders are listed newest first.
///
/// Expected: Ok with orders in descending order_date
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_history_table(entity::prelude::OrderHistory)
        .build()
        .await
        .unwrap();
    let db = test.history_db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::order_history::OrderHistoryFactory::new(db)
        .order_date(now - Duration::days(2))
        .build()
        .await?;
    let newest = factory::order_history::OrderHistoryFactory::new(db)
        .order_date(now)
        .build()
        .await?;
    let middle = factory::order_history::OrderHistoryFactory::new(db)
        .order_date(now - Duration::days(1))
        .build()
        .await?;

    let repo = OrderHistoryRepository::new(db);
    let orders = repo.get_paginated(0, 100).await?;

    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    let second_page = repo.get_paginated(1, 1).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, middle.id);

    Ok(())
}
