use super::*;

/// Tests deleting a publisher without titles.
///
/// Expected: publisher no longer found
#[tokio::test]
async fn deletes_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::create_publisher(db).await?;

    let repo = PublisherRepository::new(db);
    repo.delete(publisher.id).await?;

    assert!(repo.find_by_id(publisher.id).await?.is_none());

    Ok(())
}
