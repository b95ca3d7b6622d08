use super::*;

/// Tests updating an event's location only.
///
/// Expected: Ok(Some) with location changed and title untouched
#[tokio::test]
async fn updates_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::EventFactory::new(db)
        .title("Workshop")
        .location("Room 1")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateEventParams {
                location: Some("Room 2".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Workshop");
    assert_eq!(updated.location, "Room 2");
    assert!(updated.updated_at.is_some());

    Ok(())
}
