use super::*;

/// Tests counting owned volumes per title, ignoring unowned rows and other users.
///
/// Expected: {first: 2, second: 1}
#[tokio::test]
async fn counts_owned_volumes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (first, first_volumes) = factory::helpers::create_title_with_volumes(db, 3).await?;
    let (second, second_volumes) = factory::helpers::create_title_with_volumes(db, 2).await?;
    let (third, third_volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;

    factory::create_user_volume(db, user.id, first_volumes[0].id, true, false).await?;
    factory::create_user_volume(db, user.id, first_volumes[2].id, true, false).await?;
    factory::create_user_volume(db, user.id, second_volumes[1].id, true, false).await?;
    factory::create_user_volume(db, user.id, third_volumes[0].id, false, true).await?;
    factory::create_user_volume(db, other.id, third_volumes[0].id, true, false).await?;

    let repo = UserVolumeRepository::new(db);
    let counts = repo.owned_counts_by_title(user.id).await?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&first.id), Some(&2));
    assert_eq!(counts.get(&second.id), Some(&1));
    assert_eq!(counts.get(&third.id), None);

    Ok(())
}
