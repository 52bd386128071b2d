use super::*;
use chrono::{Duration, Utc};

/// Tests listing titles newest first with volume counts.
///
/// Expected: newest title first, counts match created volumes
#[tokio::test]
async fn lists_newest_first_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::create_publisher(db).await?;
    let older = factory::title::TitleFactory::new(db, publisher.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = factory::title::TitleFactory::new(db, publisher.id)
        .build()
        .await?;
    factory::create_volume(db, older.id, 1).await?;
    factory::create_volume(db, older.id, 2).await?;

    let repo = TitleRepository::new(db);
    let titles = repo.get_all(TitleFilter::default()).await?;

    assert_eq!(titles.len(), 2);
    assert_eq!(titles[0].title.id, newer.id);
    assert_eq!(titles[0].volume_count, 0);
    assert_eq!(titles[1].title.id, older.id);
    assert_eq!(titles[1].volume_count, 2);

    Ok(())
}

/// Tests the status, publisher and search filters.
///
/// Expected: each filter narrows the result to the matching title
#[tokio::test]
async fn applies_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_publisher(db).await?;
    let second = factory::create_publisher(db).await?;
    let naruto = factory::title::TitleFactory::new(db, first.id)
        .name("Naruto")
        .status("COMPLETED")
        .build()
        .await?;
    let bleach = factory::title::TitleFactory::new(db, second.id)
        .name("Bleach")
        .build()
        .await?;

    let repo = TitleRepository::new(db);

    let completed = repo
        .get_all(TitleFilter {
            status: Some(TitleStatus::Completed),
            ..Default::default()
        })
        .await?;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title.id, naruto.id);

    let by_publisher = repo
        .get_all(TitleFilter {
            publisher_id: Some(second.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_publisher.len(), 1);
    assert_eq!(by_publisher[0].title.id, bleach.id);

    let searched = repo
        .get_all(TitleFilter {
            search: Some("ruto".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].title.id, naruto.id);

    let blank = repo
        .get_all(TitleFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(blank.len(), 2);

    Ok(())
}

/// Tests that the name search ignores letter case on both sides.
///
/// Expected: mixed-case term matches the title
#[tokio::test]
async fn search_ignores_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::create_publisher(db).await?;
    let chainsaw = factory::title::TitleFactory::new(db, publisher.id)
        .name("Chainsaw Man")
        .build()
        .await?;
    factory::title::TitleFactory::new(db, publisher.id)
        .name("Dandadan")
        .build()
        .await?;

    let repo = TitleRepository::new(db);
    for term in ["CHAINSAW man", "chainsaw", "SAW M"] {
        let found = repo
            .get_all(TitleFilter {
                search: Some(term.to_string()),
                ..Default::default()
            })
            .await?;
        assert_eq!(found.len(), 1, "search '{}'", term);
        assert_eq!(found[0].title.id, chainsaw.id);
    }

    Ok(())
}
