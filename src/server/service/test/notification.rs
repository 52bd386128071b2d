use super::*;
use crate::server::{
    data::user_volume::UserVolumeRepository, error::AppError,
    service::notification::NotificationService,
};
use test_utils::{builder::TestBuilder, factory};

/// Tests that only opted-in subscribers receive one email per new volume.
///
/// Expected: 2 emails for the subscriber, none for the opted-out user
#[tokio::test]
async fn emails_subscribers_per_volume() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let url = frontend_url();

    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 2).await?;
    let subscriber = factory::create_user(db).await?;
    let opted_out = factory::create_user(db).await?;
    factory::create_preference(db, subscriber.id, title.id, true).await?;
    factory::create_preference(db, opted_out.id, title.id, false).await?;

    let ids: Vec<i32> = volumes.iter().map(|v| v.id).collect();
    let report = NotificationService::new(db, &mailer, &url)
        .notify_new_volumes(title.id, &ids)
        .await?;

    assert_eq!(report.sent, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.failed, 0);

    let sent = mailer.sent();
    assert!(sent.iter().all(|e| e.to_email == subscriber.email));
    assert!(sent[0].text.contains(&format!("/title/{}", title.id)));

    Ok(())
}

/// Tests that a volume is never announced twice to the same user.
///
/// Expected: second run skips every pair
#[tokio::test]
async fn skips_already_notified_volumes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let url = frontend_url();

    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;
    let subscriber = factory::create_user(db).await?;
    factory::create_preference(db, subscriber.id, title.id, true).await?;

    let service = NotificationService::new(db, &mailer, &url);
    let first = service.notify_new_volumes(title.id, &[volumes[0].id]).await?;
    let second = service.notify_new_volumes(title.id, &[volumes[0].id]).await?;

    assert_eq!(first.sent, 1);
    assert_eq!(second.sent, 0);
    assert_eq!(second.skipped, 1);
    assert_eq!(mailer.sent().len(), 1);

    let notified = UserVolumeRepository::new(db)
        .notified_pairs(&[volumes[0].id])
        .await?;
    assert!(notified.contains(&(subscriber.id, volumes[0].id)));

    Ok(())
}

/// Tests that a failed delivery is counted and not marked as notified.
///
/// Expected: one sent, one failed; the failed pair is retried on the next run
#[tokio::test]
async fn counts_failed_deliveries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let url = frontend_url();

    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;
    let reachable = factory::create_user(db).await?;
    let unreachable = factory::create_user(db).await?;
    factory::create_preference(db, reachable.id, title.id, true).await?;
    factory::create_preference(db, unreachable.id, title.id, true).await?;

    let mailer = RecordingMailer::failing_for(&unreachable.email);
    let report = NotificationService::new(db, &mailer, &url)
        .notify_new_volumes(title.id, &[volumes[0].id])
        .await?;

    assert_eq!(report.sent, 1);
    assert_eq!(report.failed, 1);

    let notified = UserVolumeRepository::new(db)
        .notified_pairs(&[volumes[0].id])
        .await?;
    assert!(notified.contains(&(reachable.id, volumes[0].id)));
    assert!(!notified.contains(&(unreachable.id, volumes[0].id)));

    Ok(())
}

/// Tests volumes of other titles and missing titles are ignored.
///
/// Expected: empty reports, no emails
#[tokio::test]
async fn ignores_unrelated_volumes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();
    let url = frontend_url();

    let (title, _) = factory::helpers::create_title_with_volumes(db, 1).await?;
    let (_, foreign) = factory::helpers::create_title_with_volumes(db, 1).await?;
    let subscriber = factory::create_user(db).await?;
    factory::create_preference(db, subscriber.id, title.id, true).await?;

    let service = NotificationService::new(db, &mailer, &url);
    let report = service.notify_new_volumes(title.id, &[foreign[0].id]).await?;
    assert_eq!(report.sent + report.skipped + report.failed, 0);

    let missing = service.notify_new_volumes(title.id + 100, &[1]).await?;
    assert_eq!(missing.sent, 0);
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests the dispatcher runs in the background and does nothing without volumes.
///
/// Expected: None for an empty list, a report with one sent email otherwise
#[tokio::test]
async fn dispatches_in_background() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mailer = RecordingMailer::default();

    let (title, volumes) = factory::helpers::create_title_with_volumes(db, 1).await?;
    let subscriber = factory::create_user(db).await?;
    factory::create_preference(db, subscriber.id, title.id, true).await?;

    let notifier = dispatcher(db, &mailer);
    assert!(notifier.dispatch_new_volumes(title.id, vec![]).is_none());

    let handle = notifier
        .dispatch_new_volumes(title.id, vec![volumes[0].id])
        .unwrap();
    let report = handle.await.unwrap();

    assert_eq!(report.sent, 1);
    assert_eq!(mailer.sent().len(), 1);

    Ok(())
}
