use super::*;

/// Tests deleting an event.
///
/// Expected: Ok(Some) and subsequent lookup returns None
#[tokio::test]
async fn deletes_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_event(db).await?;

    let repo = EventRepository::new(db);
    assert!(repo.delete(created.id).await?.is_some());
    assert!(repo.get_by_id(created.id).await?.is_none());
    assert!(repo.delete(created.id).await?.is_none());

    Ok(())
}
