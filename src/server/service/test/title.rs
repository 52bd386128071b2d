use super::*;
use crate::{
    model::title::{CreateTitleDto, NewVolumeDto, TitleStatus, UpdateTitleDto, UpdateVolumeDto},
    server::{
        error::{upload::UploadError, AppError},
        service::title::TitleService,
    },
};
use test_utils::{builder::TestBuilder, factory};

fn volume(number: i32) -> NewVolumeDto {
    NewVolumeDto {
        number,
        title: None,
        release_at: None,
    }
}

fn create_dto(name: &str, publisher_id: i32, volumes: Vec<NewVolumeDto>) -> CreateTitleDto {
    CreateTitleDto {
        name: name.to_string(),
        synopsis: Some("**Bold** synopsis".to_string()),
        author: Some("Author".to_string()),
        genre: Some(" ".to_string()),
        publisher_id,
        status: None,
        volumes,
    }
}

/// Tests creating a title derives the slug, defaults the status and stores volumes.
///
/// Expected: slug "jojo-s-bizarre-adventure", status ONGOING, two volumes
#[tokio::test]
async fn creates_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let notifier = dispatcher(db, &mailer);
    let (_dir, covers) = temp_covers();

    let publisher = factory::create_publisher(db).await?;

    let service = TitleService::new(db, &notifier, &covers);
    let created = service
        .create(create_dto(
            "JoJo's Bizarre Adventure",
            publisher.id,
            vec![volume(2), volume(1)],
        ))
        .await?;

    assert_eq!(created.title.slug, "jojo-s-bizarre-adventure");
    assert_eq!(created.title.status, TitleStatus::Ongoing);
    assert_eq!(created.title.genre, None);
    assert_eq!(created.volumes.len(), 2);

    let fetched = service.get_by_slug("jojo-s-bizarre-adventure").await?;
    assert_eq!(fetched.title.id, created.title.id);
    assert_eq!(fetched.volumes[0].number, 1);

    Ok(())
}

/// Tests that colliding names get numbered slugs.
///
/// Expected: "monster", then "monster-2"
#[tokio::test]
async fn suffixes_duplicate_slugs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let notifier = dispatcher(db, &mailer);
    let (_dir, covers) = temp_covers();

    let publisher = factory::create_publisher(db).await?;

    let service = TitleService::new(db, &notifier, &covers);
    let first = service.create(create_dto("Monster", publisher.id, vec![])).await?;
    let second = service.create(create_dto("MONSTER!", publisher.id, vec![])).await?;

    assert_eq!(first.title.slug, "monster");
    assert_eq!(second.title.slug, "monster-2");

    Ok(())
}

/// Tests create validation and the publisher check.
///
/// Expected: Validation for bad volumes, NotFound for a missing publisher
#[tokio::test]
async fn rejects_invalid_create() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let notifier = dispatcher(db, &mailer);
    let (_dir, covers) = temp_covers();

    let publisher = factory::create_publisher(db).await?;

    let service = TitleService::new(db, &notifier, &covers);

    let invalid = service
        .create(create_dto("Dup", publisher.id, vec![volume(1), volume(1), volume(-2)]))
        .await;
    assert!(matches!(invalid, Err(AppError::Validation(errors)) if errors.len() == 2));

    let long_name = "x".repeat(201);
    assert!(matches!(
        service.create(create_dto(&long_name, publisher.id, vec![])).await,
        Err(AppError::Validation(_))
    ));

    assert!(matches!(
        service.create(create_dto("Lost", publisher.id + 50, vec![])).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that a rename regenerates the slug and a volume list replaces volumes,
/// emailing subscribers about the new ones only.
///
/// Expected: new slug, volumes [2, 3], one email for volume 3
#[tokio::test]
async fn update_renames_and_syncs_volumes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let notifier = dispatcher(db, &mailer);
    let (_dir, covers) = temp_covers();

    let (title, _) = factory::helpers::create_title_with_volumes(db, 2).await?;
    let subscriber = factory::create_user(db).await?;
    factory::create_preference(db, subscriber.id, title.id, true).await?;

    let service = TitleService::new(db, &notifier, &covers);
    let updated = service
        .update(
            title.id,
            UpdateTitleDto {
                name: Some("Vinland Saga".to_string()),
                status: Some(TitleStatus::Completed),
                volumes: Some(vec![volume(2), volume(3)]),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title.slug, "vinland-saga");
    assert_eq!(updated.title.status, TitleStatus::Completed);
    assert_eq!(
        updated.volumes.iter().map(|v| v.number).collect::<Vec<_>>(),
        vec![2, 3]
    );

    let sent = mailer.wait_for(1).await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_email, subscriber.email);
    assert!(sent[0].subject.ends_with("Vol. 3"));

    Ok(())
}

/// Tests that keeping the same name keeps the slug.
///
/// Expected: slug unchanged
#[tokio::test]
async fn update_keeps_slug_for_same_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let notifier = dispatcher(db, &mailer);
    let (_dir, covers) = temp_covers();

    let (_, title) = factory::helpers::create_title_with_publisher(db).await?;

    let service = TitleService::new(db, &notifier, &covers);
    let updated = service
        .update(
            title.id,
            UpdateTitleDto {
                name: Some(title.name.clone()),
                synopsis: Some(String::new()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title.slug, title.slug);
    assert_eq!(updated.title.synopsis, None);

    Ok(())
}

/// Tests adding a volume notifies subscribers and rejects duplicate numbers.
///
/// Expected: one email, then Conflict for the same number
#[tokio::test]
async fn add_volume_notifies_and_rejects_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let notifier = dispatcher(db, &mailer);
    let (_dir, covers) = temp_covers();

    let (title, _) = factory::helpers::create_title_with_volumes(db, 1).await?;
    let subscriber = factory::create_user(db).await?;
    let opted_out = factory::create_user(db).await?;
    factory::create_preference(db, subscriber.id, title.id, true).await?;
    factory::create_preference(db, opted_out.id, title.id, false).await?;

    let service = TitleService::new(db, &notifier, &covers);
    let added = service.add_volume(title.id, volume(2)).await?;
    assert_eq!(added.number, 2);

    let sent = mailer.wait_for(1).await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_email, subscriber.email);

    assert!(matches!(
        service.add_volume(title.id, volume(2)).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.add_volume(title.id + 100, volume(1)).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests renumbering and deleting volumes scoped to their title.
///
/// Expected: renumber onto a taken number is Conflict; foreign volume is NotFound
#[tokio::test]
async fn updates_and_deletes_volumes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let notifier = dispatcher(db, &mailer);
    let (_dir, covers) = temp_covers();

    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 2).await?;
    let (_, foreign) = factory::helpers::create_title_with_volumes(db, 1).await?;

    let service = TitleService::new(db, &notifier, &covers);

    let taken = service
        .update_volume(
            title.id,
            volumes[0].id,
            UpdateVolumeDto {
                number: Some(2),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    let renamed = service
        .update_volume(
            title.id,
            volumes[0].id,
            UpdateVolumeDto {
                number: Some(5),
                title: Some("Side story".to_string()),
                release_at: None,
            },
        )
        .await?;
    assert_eq!(renamed.number, 5);
    assert_eq!(renamed.title.as_deref(), Some("Side story"));

    assert!(matches!(
        service.delete_volume(title.id, foreign[0].id).await,
        Err(AppError::NotFound(_))
    ));

    service.delete_volume(title.id, volumes[1].id).await?;
    let remaining = service.volumes(title.id).await?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}

/// Tests cover upload replaces the previous file and title deletion removes covers.
///
/// Expected: old file gone after replacement, new file gone after delete
#[tokio::test]
async fn manages_cover_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let notifier = dispatcher(db, &mailer);
    let (_dir, covers) = temp_covers();

    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;

    let service = TitleService::new(db, &notifier, &covers);

    let first = service.set_title_cover(title.id, Some("image/png"), PNG).await?;
    let first_path = covers.path_of(first.title.cover_image.as_deref().unwrap()).unwrap();
    assert!(first_path.exists());

    let second = service.set_title_cover(title.id, Some("image/png"), PNG).await?;
    let second_path = covers.path_of(second.title.cover_image.as_deref().unwrap()).unwrap();
    assert!(!first_path.exists());
    assert!(second_path.exists());

    let volume = service
        .set_volume_cover(title.id, volumes[0].id, Some("image/png"), PNG)
        .await?;
    let volume_path = covers.path_of(volume.cover_image.as_deref().unwrap()).unwrap();

    assert!(matches!(
        service.set_title_cover(title.id, Some("text/plain"), b"plain").await,
        Err(AppError::UploadErr(UploadError::UnsupportedType(_)))
    ));

    service.delete(title.id).await?;
    assert!(!second_path.exists());
    assert!(!volume_path.exists());
    assert!(matches!(
        service.get_by_id(title.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that a cover file is not left behind when storing its path fails.
///
/// A trigger makes every cover update abort after the file was written.
///
/// Expected: Err for both uploads and an empty covers directory
#[tokio::test]
async fn removes_saved_cover_when_update_fails() -> Result<(), AppError> {
    use sea_orm::ConnectionTrait;

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let notifier = dispatcher(db, &mailer);
    let (dir, covers) = temp_covers();

    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;

    for table in ["title", "volume"] {
        db.execute_unprepared(&format!(
            "CREATE TRIGGER reject_{table}_cover BEFORE UPDATE OF cover_image ON {table} \
             BEGIN SELECT RAISE(ABORT, 'cover rejected'); END;"
        ))
        .await?;
    }

    let service = TitleService::new(db, &notifier, &covers);

    assert!(matches!(
        service.set_title_cover(title.id, Some("image/png"), PNG).await,
        Err(AppError::DbErr(_))
    ));
    assert!(matches!(
        service
            .set_volume_cover(title.id, volumes[0].id, Some("image/png"), PNG)
            .await,
        Err(AppError::DbErr(_))
    ));

    let stored = std::fs::read_dir(dir.path().join("covers"))
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(stored, 0);

    Ok(())
}
