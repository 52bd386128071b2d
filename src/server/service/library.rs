//! A user's own library: volume ownership, per-title notification preference and the
//! titles they collect.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        notification_preference::NotificationPreferenceRepository, title::TitleRepository,
        user_volume::UserVolumeRepository, volume::VolumeRepository,
    },
    error::AppError,
    model::library::{LibraryTitle, VolumeProgress},
};

pub struct LibraryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LibraryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ownership of every volume of a title, in volume number order.
    ///
    /// # Returns
    /// - `Ok(Vec<VolumeProgress>)` - One entry per volume; untracked volumes are not owned
    /// - `Err(AppError::NotFound)` - Title does not exist
    pub async fn volume_progress(
        &self,
        user_id: i32,
        title_id: i32,
    ) -> Result<Vec<VolumeProgress>, AppError> {
        self.require_title(title_id).await?;

        let volumes = VolumeRepository::new(self.db).get_by_title(title_id).await?;
        let owned = UserVolumeRepository::new(self.db)
            .get_for_title(user_id, title_id)
            .await?;

        Ok(volumes
            .into_iter()
            .map(|v| VolumeProgress {
                volume_id: v.id,
                owned: owned.get(&v.id).copied().unwrap_or(false),
            })
            .collect())
    }

    /// Stores ownership flags for volumes of one title.
    ///
    /// # Returns
    /// - `Ok(Vec<VolumeProgress>)` - Ownership of every volume after the update
    /// - `Err(AppError::NotFound)` - Title does not exist
    /// - `Err(AppError::BadRequest)` - An entry names a volume outside the title
    pub async fn update_volume_progress(
        &self,
        user_id: i32,
        title_id: i32,
        entries: Vec<VolumeProgress>,
    ) -> Result<Vec<VolumeProgress>, AppError> {
        self.require_title(title_id).await?;

        let volume_ids: HashSet<i32> = VolumeRepository::new(self.db)
            .get_by_title(title_id)
            .await?
            .into_iter()
            .map(|v| v.id)
            .collect();

        let foreign: Vec<String> = entries
            .iter()
            .filter(|e| !volume_ids.contains(&e.volume_id))
            .map(|e| e.volume_id.to_string())
            .collect();
        if !foreign.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Volumes {} do not belong to title {}",
                foreign.join(", "),
                title_id
            )));
        }

        UserVolumeRepository::new(self.db)
            .set_owned(user_id, &entries)
            .await?;

        self.volume_progress(user_id, title_id).await
    }

    /// Whether the user gets emailed about new volumes of the title; `false` when unset.
    pub async fn notification_preference(
        &self,
        user_id: i32,
        title_id: i32,
    ) -> Result<bool, AppError> {
        self.require_title(title_id).await?;

        let stored = NotificationPreferenceRepository::new(self.db)
            .get(user_id, title_id)
            .await?;

        Ok(stored.unwrap_or(false))
    }

    pub async fn set_notification_preference(
        &self,
        user_id: i32,
        title_id: i32,
        email_on_new_volume: bool,
    ) -> Result<bool, AppError> {
        self.require_title(title_id).await?;

        Ok(NotificationPreferenceRepository::new(self.db)
            .upsert(user_id, title_id, email_on_new_volume)
            .await?)
    }

    /// Titles in which the user owns at least one volume, newest title first.
    pub async fn my_titles(&self, user_id: i32) -> Result<Vec<LibraryTitle>, AppError> {
        let owned = UserVolumeRepository::new(self.db)
            .owned_counts_by_title(user_id)
            .await?;

        let ids: Vec<i32> = owned.keys().copied().collect();
        let mut titles = TitleRepository::new(self.db).get_by_ids(&ids).await?;

        let volume_repo = VolumeRepository::new(self.db);
        let mut library = Vec::with_capacity(titles.len());
        for (title_id, owned_count) in owned {
            let Some(title) = titles.remove(&title_id) else {
                continue;
            };
            let total_count = volume_repo.count_by_title(title_id).await?;

            library.push(LibraryTitle {
                title,
                owned_count,
                total_count,
            });
        }

        library.sort_by(|a, b| {
            b.title
                .created_at
                .cmp(&a.title.created_at)
                .then(b.title.id.cmp(&a.title.id))
        });

        Ok(library)
    }

    async fn require_title(&self, title_id: i32) -> Result<(), AppError> {
        match TitleRepository::new(self.db).find_by_id(title_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Title not found".to_string())),
        }
    }
}
