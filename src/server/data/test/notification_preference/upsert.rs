use super::*;

/// Tests reading an unset preference, then inserting and flipping it.
///
/// Expected: None, then true, then false
#[tokio::test]
async fn inserts_then_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, title) = factory::helpers::create_title_with_publisher(db).await?;

    let repo = NotificationPreferenceRepository::new(db);

    assert_eq!(repo.get(user.id, title.id).await?, None);
    assert!(repo.upsert(user.id, title.id, true).await?);
    assert_eq!(repo.get(user.id, title.id).await?, Some(true));
    assert!(!repo.upsert(user.id, title.id, false).await?);
    assert_eq!(repo.get(user.id, title.id).await?, Some(false));

    Ok(())
}
