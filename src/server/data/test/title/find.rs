use super::*;

/// Tests finding titles by ID and slug and the slug_exists check.
///
/// Expected: both lookups return the title; slug_exists ignores the excluded title
#[tokio::test]
async fn finds_by_id_and_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::create_publisher(db).await?;
    let title = factory::title::TitleFactory::new(db, publisher.id)
        .slug("berserk")
        .status("COMPLETED")
        .build()
        .await?;

    let repo = TitleRepository::new(db);
    let by_id = repo.find_by_id(title.id).await?.unwrap();
    let by_slug = repo.find_by_slug("berserk").await?.unwrap();

    assert_eq!(by_id, by_slug);
    assert_eq!(by_id.status, TitleStatus::Completed);
    assert!(repo.slug_exists("berserk", None).await?);
    assert!(!repo.slug_exists("berserk", Some(title.id)).await?);
    assert!(!repo.slug_exists("vagabond", None).await?);
    assert!(repo.find_by_slug("vagabond").await?.is_none());

    Ok(())
}

/// Tests that an unknown stored status surfaces as a type error.
///
/// Expected: Err(DbErr::Type)
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::create_publisher(db).await?;
    let title = factory::title::TitleFactory::new(db, publisher.id)
        .status("CANCELLED")
        .build()
        .await?;

    let repo = TitleRepository::new(db);
    let result = repo.find_by_id(title.id).await;

    assert!(matches!(result, Err(DbErr::Type(_))));

    Ok(())
}
