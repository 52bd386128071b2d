use super::*;

/// Tests marking notified on an untracked volume creates an unowned row.
///
/// Expected: row with owned=false, notified=true; pair reported as notified
#[tokio::test]
async fn creates_unowned_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (_, volumes) = factory::helpers::create_title_with_volumes(db, 2).await?;

    let repo = UserVolumeRepository::new(db);
    repo.mark_notified(user.id, volumes[0].id).await?;

    let rows = entity::prelude::UserVolume::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].owned);
    assert!(rows[0].notified);

    let pairs = repo
        .notified_pairs(&[volumes[0].id, volumes[1].id])
        .await?;
    assert!(pairs.contains(&(user.id, volumes[0].id)));
    assert!(!pairs.contains(&(other.id, volumes[0].id)));
    assert_eq!(pairs.len(), 1);

    Ok(())
}

/// Tests marking notified on an owned volume keeps ownership.
///
/// Expected: owned stays true
#[tokio::test]
async fn keeps_ownership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;
    let row = factory::create_user_volume(db, user.id, volumes[0].id, true, false).await?;

    let repo = UserVolumeRepository::new(db);
    repo.mark_notified(user.id, volumes[0].id).await?;

    let stored = entity::prelude::UserVolume::find_by_id(row.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.owned);
    assert!(stored.notified);

    Ok(())
}
