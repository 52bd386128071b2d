use super::*;

/// Tests that deleting a title cascades to its volumes.
///
/// Expected: no title and no volume rows remain
#[tokio::test]
async fn deletes_title_and_volumes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (title, _) = factory::helpers::create_title_with_volumes(db, 2).await?;

    let repo = TitleRepository::new(db);
    repo.delete(title.id).await?;

    assert!(repo.find_by_id(title.id).await?.is_none());
    assert_eq!(entity::prelude::Volume::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting a title also removes the user rows hanging off it.
///
/// Ownership rows reference the title's volumes and notification preferences reference
/// the title itself; both must go with it while the users stay.
///
/// Expected: no user_volume or notification_preference rows remain
#[tokio::test]
async fn deletes_ownership_and_preferences_with_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 2).await?;
    let (other, other_volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;

    factory::create_user_volume(db, user.id, volumes[0].id, true, false).await?;
    factory::create_user_volume(db, user.id, volumes[1].id, false, true).await?;
    factory::create_user_volume(db, user.id, other_volumes[0].id, true, false).await?;
    factory::create_preference(db, user.id, title.id, true).await?;
    factory::create_preference(db, user.id, other.id, true).await?;

    TitleRepository::new(db).delete(title.id).await?;

    assert_eq!(entity::prelude::UserVolume::find().count(db).await?, 1);
    assert_eq!(
        entity::prelude::NotificationPreference::find()
            .count(db)
            .await?,
        1
    );
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
