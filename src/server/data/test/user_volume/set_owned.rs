use super::*;

/// Tests upserting ownership flags for a title's volumes.
///
/// Creates one row, flips it, and adds a second; rows of other titles are not
/// reported for this title.
///
/// Expected: map reflects the latest flags
#[tokio::test]
async fn upserts_ownership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 3).await?;
    let (_, foreign) = factory::helpers::create_title_with_volumes(db, 1).await?;
    factory::create_user_volume(db, user.id, foreign[0].id, true, false).await?;

    let repo = UserVolumeRepository::new(db);
    repo.set_owned(
        user.id,
        &[VolumeProgress {
            volume_id: volumes[0].id,
            owned: true,
        }],
    )
    .await?;
    repo.set_owned(
        user.id,
        &[
            VolumeProgress {
                volume_id: volumes[0].id,
                owned: false,
            },
            VolumeProgress {
                volume_id: volumes[1].id,
                owned: true,
            },
        ],
    )
    .await?;

    let progress = repo.get_for_title(user.id, title.id).await?;

    assert_eq!(progress.len(), 2);
    assert_eq!(progress.get(&volumes[0].id), Some(&false));
    assert_eq!(progress.get(&volumes[1].id), Some(&true));
    assert_eq!(progress.get(&volumes[2].id), None);

    Ok(())
}

/// Tests that changing ownership keeps the notified flag.
///
/// Expected: notified stays true
#[tokio::test]
async fn keeps_notified_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;
    let row = factory::create_user_volume(db, user.id, volumes[0].id, false, true).await?;

    let repo = UserVolumeRepository::new(db);
    repo.set_owned(
        user.id,
        &[VolumeProgress {
            volume_id: volumes[0].id,
            owned: true,
        }],
    )
    .await?;

    let stored = entity::prelude::UserVolume::find_by_id(row.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.owned);
    assert!(stored.notified);

    Ok(())
}
