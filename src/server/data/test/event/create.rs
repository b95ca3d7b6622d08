use super::*;

/// Tests creating an event with free-form date and time strings.
///
/// Expected: Ok with strings stored verbatim
#[tokio::test]
async fn creates_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo
        .create(CreateEventParams {
            title: "Open Day".to_string(),
            description: None,
            date: "next Friday".to_string(),
            time: "10:00 - 14:00".to_string(),
            location: "Main Hall".to_string(),
            url: None,
            image_url: Some("https://img.example.com/open-day.png".to_string()),
        })
        .await?;

    assert_eq!(event.date, "next Friday");
    assert_eq!(event.time, "10:00 - 14:00");
    assert_eq!(
        event.image_url.as_deref(),
        Some("https://img.example.com/open-day.png")
    );

    Ok(())
}
