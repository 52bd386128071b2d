use super::*;

/// Tests duplicate number detection with and without an excluded volume.
///
/// Expected: true for a taken number, false once its own volume is excluded
#[tokio::test]
async fn detects_taken_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 2).await?;

    let repo = VolumeRepository::new(db);

    assert!(repo.number_exists(title.id, 1, None).await?);
    assert!(!repo.number_exists(title.id, 1, Some(volumes[0].id)).await?);
    assert!(!repo.number_exists(title.id, 3, None).await?);

    Ok(())
}
