use super::*;

/// Tests creating a title with volumes in one call.
///
/// Verifies the title row is stored with its status and slug and the volumes are
/// returned ordered by number regardless of input order.
///
/// Expected: Ok with volumes [1, 2, 3]
#[tokio::test]
async fn creates_title_with_volumes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::create_publisher(db).await?;

    let repo = TitleRepository::new(db);
    let created = repo
        .create(CreateTitleParam {
            name: "One Piece".to_string(),
            synopsis: Some("Pirates".to_string()),
            author: Some("Eiichiro Oda".to_string()),
            genre: None,
            slug: "one-piece".to_string(),
            status: TitleStatus::Ongoing,
            publisher_id: publisher.id,
            volumes: vec![new_volume(3), new_volume(1), new_volume(2)],
        })
        .await?;

    assert_eq!(created.title.slug, "one-piece");
    assert_eq!(created.title.status, TitleStatus::Ongoing);
    assert_eq!(
        created.volumes.iter().map(|v| v.number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert!(created.volumes.iter().all(|v| v.title_id == created.title.id));

    Ok(())
}

/// Tests that a failing insert leaves nothing behind.
///
/// Uses a publisher ID that does not exist so the title insert violates the
/// foreign key.
///
/// Expected: Err and no title rows
#[tokio::test]
async fn rolls_back_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TitleRepository::new(db);
    let result = repo
        .create(CreateTitleParam {
            name: "Orphan".to_string(),
            synopsis: None,
            author: None,
            genre: None,
            slug: "orphan".to_string(),
            status: TitleStatus::Completed,
            publisher_id: 12345,
            volumes: vec![new_volume(1)],
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Title::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Volume::find().count(db).await?, 0);

    Ok(())
}
