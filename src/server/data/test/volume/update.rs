use super::*;

/// Tests a partial volume update, cover change and deletion.
///
/// Expected: number and label updated, cover stored, volume gone after delete
#[tokio::test]
async fn updates_and_deletes_volume() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;
    let volume = &volumes[0];

    let repo = VolumeRepository::new(db);
    let updated = repo
        .update(
            volume.id,
            UpdateVolumeParam {
                number: Some(10),
                title: Some("Ten".to_string()),
                release_at: None,
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.number, 10);
    assert_eq!(updated.title.as_deref(), Some("Ten"));

    let covered = repo
        .set_cover(volume.id, Some("/uploads/covers/v.webp".to_string()))
        .await?
        .unwrap();
    assert_eq!(covered.cover_image.as_deref(), Some("/uploads/covers/v.webp"));

    repo.delete(volume.id).await?;
    assert!(repo.find_by_id(volume.id).await?.is_none());
    assert!(repo
        .update(volume.id, UpdateVolumeParam::default())
        .await?
        .is_none());

    Ok(())
}
