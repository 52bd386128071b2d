use super::*;

/// Tests a partial update that leaves volumes alone.
///
/// Expected: changed fields updated, others preserved, empty sync
#[tokio::test]
async fn updates_fields_without_volumes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (title, _) = factory::helpers::create_title_with_volumes(db, 2).await?;

    let repo = TitleRepository::new(db);
    let (updated, sync) = repo
        .update(
            title.id,
            UpdateTitleParam {
                name: Some("Renamed".to_string()),
                slug: Some("renamed".to_string()),
                status: Some(TitleStatus::Hiatus),
                ..Default::default()
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.slug, "renamed");
    assert_eq!(updated.status, TitleStatus::Hiatus);
    assert_eq!(updated.genre, title.genre);
    assert!(sync.created.is_empty() && sync.updated.is_empty() && sync.removed.is_empty());

    Ok(())
}

/// Tests replacing the volume list.
///
/// Starting from volumes 1-3, the desired list [2, 3, 4] keeps 2 and 3 (relabeling 3),
/// creates 4 and deletes 1.
///
/// Expected: created [4], updated [2, 3], removed [1]
#[tokio::test]
async fn replaces_volume_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 3).await?;

    let repo = TitleRepository::new(db);
    let (_, sync) = repo
        .update(
            title.id,
            UpdateTitleParam::default(),
            Some(vec![
                new_volume(2),
                NewVolumeParam {
                    number: 3,
                    title: Some("Finale".to_string()),
                    release_at: None,
                },
                new_volume(4),
            ]),
        )
        .await?
        .unwrap();

    assert_eq!(sync.created.iter().map(|v| v.number).collect::<Vec<_>>(), vec![4]);
    assert_eq!(sync.updated.iter().map(|v| v.number).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(sync.removed.iter().map(|v| v.id).collect::<Vec<_>>(), vec![volumes[0].id]);
    assert_eq!(sync.updated[1].title.as_deref(), Some("Finale"));

    let remaining = entity::prelude::Volume::find().count(db).await?;
    assert_eq!(remaining, 3);

    Ok(())
}

/// Tests updating a missing title.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TitleRepository::new(db);
    let result = repo.update(42, UpdateTitleParam::default(), None).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests storing and clearing a cover path.
///
/// Expected: cover set, then cleared
#[tokio::test]
async fn sets_cover() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, title) = factory::helpers::create_title_with_publisher(db).await?;

    let repo = TitleRepository::new(db);
    let with_cover = repo
        .set_cover(title.id, Some("/uploads/covers/a.png".to_string()))
        .await?
        .unwrap();
    assert_eq!(with_cover.cover_image.as_deref(), Some("/uploads/covers/a.png"));

    let cleared = repo.set_cover(title.id, None).await?.unwrap();
    assert!(cleared.cover_image.is_none());

    Ok(())
}
