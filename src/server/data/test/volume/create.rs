use super::*;

/// Tests adding a volume to a title and listing volumes in number order.
///
/// Expected: volumes listed as [1, 2, 5]
#[tokio::test]
async fn creates_volume_and_lists_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (title, _) = factory::helpers::create_title_with_volumes(db, 2).await?;

    let repo = VolumeRepository::new(db);
    let created = repo
        .create(
            title.id,
            NewVolumeParam {
                number: 5,
                title: Some("Special".to_string()),
                release_at: None,
            },
        )
        .await?;

    assert_eq!(created.title_id, title.id);
    assert_eq!(created.label(), "Vol. 5: Special");

    let numbers: Vec<i32> = repo
        .get_by_title(title.id)
        .await?
        .into_iter()
        .map(|v| v.number)
        .collect();
    assert_eq!(numbers, vec![1, 2, 5]);
    assert_eq!(repo.count_by_title(title.id).await?, 3);

    Ok(())
}

/// Tests that get_by_ids only returns volumes of the requested title.
///
/// Expected: the foreign volume is ignored
#[tokio::test]
async fn get_by_ids_scopes_to_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 2).await?;
    let (_, other_volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;

    let repo = VolumeRepository::new(db);
    let found = repo
        .get_by_ids(title.id, &[volumes[1].id, other_volumes[0].id])
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, volumes[1].id);
    assert!(repo.get_by_ids(title.id, &[]).await?.is_empty());

    Ok(())
}
