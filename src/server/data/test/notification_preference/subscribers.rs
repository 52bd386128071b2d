use super::*;

/// Tests that only users opted in for the title are returned.
///
/// Expected: the single subscribed user
#[tokio::test]
async fn returns_opted_in_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let subscribed = factory::create_user(db).await?;
    let opted_out = factory::create_user(db).await?;
    let elsewhere = factory::create_user(db).await?;
    let (_, title) = factory::helpers::create_title_with_publisher(db).await?;
    let (_, other_title) = factory::helpers::create_title_with_publisher(db).await?;

    factory::create_preference(db, subscribed.id, title.id, true).await?;
    factory::create_preference(db, opted_out.id, title.id, false).await?;
    factory::create_preference(db, elsewhere.id, other_title.id, true).await?;

    let repo = NotificationPreferenceRepository::new(db);
    let subscribers = repo.subscribers(title.id).await?;

    assert_eq!(subscribers.len(), 1);
    assert_eq!(subscribers[0].user_id, subscribed.id);
    assert_eq!(subscribers[0].email, subscribed.email);

    Ok(())
}
