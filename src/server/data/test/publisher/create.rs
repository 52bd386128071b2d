use super::*;

/// Tests creating a publisher and reading it back by ID and by name.
///
/// Expected: Ok with the same publisher from every lookup
#[tokio::test]
async fn creates_and_finds_publisher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PublisherRepository::new(db);
    let created = repo
        .create(CreatePublisherParam {
            name: "Shueisha".to_string(),
            country: Some("Japan".to_string()),
        })
        .await?;

    assert_eq!(created.name, "Shueisha");
    assert_eq!(created.country.as_deref(), Some("Japan"));
    assert_eq!(repo.find_by_id(created.id).await?, Some(created.clone()));
    assert_eq!(repo.find_by_name("Shueisha").await?, Some(created));
    assert!(repo.find_by_name("Kodansha").await?.is_none());

    Ok(())
}

/// Tests that listing is ordered by name.
///
/// Expected: names in ascending order
#[tokio::test]
async fn lists_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Viz", "Kodansha", "Panini"] {
        factory::publisher::PublisherFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = PublisherRepository::new(db);
    let names: Vec<String> = repo.get_all().await?.into_iter().map(|p| p.name).collect();

    assert_eq!(names, vec!["Kodansha", "Panini", "Viz"]);

    Ok(())
}
