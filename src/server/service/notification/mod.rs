//! New volume email notifications.
//!
//! When volumes are added to a title, every user who opted in for that title receives
//! one email per volume. `user_volume.notified` records each delivery so a volume is
//! never announced twice to the same user.

pub mod mailer;
pub mod template;

use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::{
        notification_preference::NotificationPreferenceRepository, title::TitleRepository,
        user_volume::UserVolumeRepository, volume::VolumeRepository,
    },
    error::AppError,
    model::library::NotificationReport,
    service::notification::{mailer::Mailer, template::new_volume_email},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
    frontend_url: &'a Url,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer, frontend_url: &'a Url) -> Self {
        Self {
            db,
            mailer,
            frontend_url,
        }
    }

    /// Emails subscribers of a title about newly added volumes.
    ///
    /// Pairs already notified are skipped. Delivery failures are logged and counted;
    /// they never abort the run. A title deleted in the meantime yields an empty report.
    ///
    /// # Arguments
    /// - `title_id` - Title the volumes were added to
    /// - `volume_ids` - IDs of the new volumes; IDs of other titles are ignored
    ///
    /// # Returns
    /// - `Ok(NotificationReport)` - Counts of sent, skipped and failed deliveries
    /// - `Err(AppError::DbErr)` - Loading the title, volumes or subscribers failed
    pub async fn notify_new_volumes(
        &self,
        title_id: i32,
        volume_ids: &[i32],
    ) -> Result<NotificationReport, AppError> {
        let mut report = NotificationReport::default();

        let Some(title) = TitleRepository::new(self.db).find_by_id(title_id).await? else {
            return Ok(report);
        };

        let volumes = VolumeRepository::new(self.db)
            .get_by_ids(title_id, volume_ids)
            .await?;
        if volumes.is_empty() {
            return Ok(report);
        }

        let subscribers = NotificationPreferenceRepository::new(self.db)
            .subscribers(title_id)
            .await?;
        if subscribers.is_empty() {
            return Ok(report);
        }

        let user_volume_repo = UserVolumeRepository::new(self.db);
        let ids: Vec<i32> = volumes.iter().map(|v| v.id).collect();
        let already_notified = user_volume_repo.notified_pairs(&ids).await?;

        for subscriber in &subscribers {
            for volume in &volumes {
                if already_notified.contains(&(subscriber.user_id, volume.id)) {
                    report.skipped += 1;
                    continue;
                }

                let email = new_volume_email(subscriber, &title, volume, self.frontend_url);
                match self.mailer.send(email).await {
                    Ok(()) => {
                        report.sent += 1;
                        if let Err(e) = user_volume_repo
                            .mark_notified(subscriber.user_id, volume.id)
                            .await
                        {
                            tracing::error!(
                                "Failed to mark volume {} as notified for user {}: {}",
                                volume.id,
                                subscriber.user_id,
                                e
                            );
                        }
                    }
                    Err(e) => {
                        report.failed += 1;
                        tracing::error!(
                            "Failed to email user {} about volume {} of title {}: {}",
                            subscriber.user_id,
                            volume.number,
                            title.id,
                            e
                        );
                    }
                }
            }
        }

        tracing::info!(
            "New volume notifications for title {}: {} sent, {} skipped, {} failed",
            title.id,
            report.sent,
            report.skipped,
            report.failed
        );

        Ok(report)
    }
}

/// Runs notification jobs in the background so requests never wait on SMTP.
#[derive(Clone)]
pub struct NotificationDispatcher {
    db: DatabaseConnection,
    mailer: Arc<dyn Mailer>,
    frontend_url: Url,
}

impl NotificationDispatcher {
    pub fn new(db: DatabaseConnection, mailer: Arc<dyn Mailer>, frontend_url: Url) -> Self {
        Self {
            db,
            mailer,
            frontend_url,
        }
    }

    /// Spawns [`NotificationService::notify_new_volumes`] on the Tokio runtime.
    ///
    /// # Returns
    /// - `Some(JoinHandle)` - Job spawned
    /// - `None` - No volumes given, nothing to do
    pub fn dispatch_new_volumes(
        &self,
        title_id: i32,
        volume_ids: Vec<i32>,
    ) -> Option<tokio::task::JoinHandle<NotificationReport>> {
        if volume_ids.is_empty() {
            return None;
        }

        let dispatcher = self.clone();
        Some(tokio::spawn(async move {
            let service = NotificationService::new(
                &dispatcher.db,
                dispatcher.mailer.as_ref(),
                &dispatcher.frontend_url,
            );

            match service.notify_new_volumes(title_id, &volume_ids).await {
                Ok(report) => report,
                Err(e) => {
                    tracing::error!(
                        "New volume notifications for title {} failed: {}",
                        title_id,
                        e
                    );
                    NotificationReport::default()
                }
            }
        }))
    }
}
