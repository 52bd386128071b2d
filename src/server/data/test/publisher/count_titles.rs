use super::*;

/// Tests counting the titles owned by a publisher.
///
/// Expected: 2 for the publisher with titles, 0 for the other
#[tokio::test]
async fn counts_titles_per_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::create_publisher(db).await?;
    let idle = factory::create_publisher(db).await?;
    factory::create_title(db, busy.id).await?;
    factory::create_title(db, busy.id).await?;

    let repo = PublisherRepository::new(db);

    assert_eq!(repo.count_titles(busy.id).await?, 2);
    assert_eq!(repo.count_titles(idle.id).await?, 0);

    Ok(())
}
