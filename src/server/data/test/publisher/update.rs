use super::*;

/// Tests that a partial update only changes the provided fields.
///
/// Expected: name changed, country preserved
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::publisher::PublisherFactory::new(db)
        .name("JBC")
        .country(Some("Brazil"))
        .build()
        .await?;

    let repo = PublisherRepository::new(db);
    let updated = repo
        .update(
            publisher.id,
            UpdatePublisherParam {
                name: Some("Editora JBC".to_string()),
                country: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Editora JBC");
    assert_eq!(updated.country.as_deref(), Some("Brazil"));

    Ok(())
}

/// Tests updating a missing publisher.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PublisherRepository::new(db);
    let result = repo.update(999, UpdatePublisherParam::default()).await?;

    assert!(result.is_none());

    Ok(())
}
