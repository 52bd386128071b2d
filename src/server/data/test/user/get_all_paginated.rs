use super::*;

/// Tests paging through users ordered by name with their roles attached.
///
/// Expected: first page holds the two alphabetically first users, total counts all
#[tokio::test]
async fn pages_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Chika").build().await?;
    factory::user::UserFactory::new(db)
        .name("Aoi")
        .admin()
        .build()
        .await?;
    factory::user::UserFactory::new(db).name("Botan").build().await?;

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(0, 2).await?;
    let (second, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["Aoi", "Botan"]
    );
    assert!(first[0].is_admin());
    assert_eq!(first[1].roles, vec![Role::User]);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Chika");

    Ok(())
}

/// Tests an empty table.
///
/// Expected: Ok((vec![], 0))
#[tokio::test]
async fn returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
