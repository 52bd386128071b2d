//! Per-title "email on new volume" preferences.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::library::Subscriber;

pub struct NotificationPreferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationPreferenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored flag.
    ///
    /// # Returns
    /// - `Ok(Some(bool))` - Stored preference
    /// - `Ok(None)` - User never set a preference for the title
    pub async fn get(&self, user_id: i32, title_id: i32) -> Result<Option<bool>, DbErr> {
        let row = self.find(user_id, title_id).await?;

        Ok(row.map(|r| r.email_on_new_volume))
    }

    /// Inserts or updates the flag.
    pub async fn upsert(
        &self,
        user_id: i32,
        title_id: i32,
        email_on_new_volume: bool,
    ) -> Result<bool, DbErr> {
        let now = Utc::now();
        let row = match self.find(user_id, title_id).await? {
            Some(row) => {
                let mut active = row.into_active_model();
                active.email_on_new_volume = ActiveValue::Set(email_on_new_volume);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::notification_preference::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    title_id: ActiveValue::Set(title_id),
                    email_on_new_volume: ActiveValue::Set(email_on_new_volume),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(row.email_on_new_volume)
    }

    /// Gets the users who asked to be emailed about new volumes of a title.
    ///
    /// # Returns
    /// - `Ok(Vec<Subscriber>)` - Subscribers ordered by user ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn subscribers(&self, title_id: i32) -> Result<Vec<Subscriber>, DbErr> {
        let rows = entity::prelude::NotificationPreference::find()
            .filter(entity::notification_preference::Column::TitleId.eq(title_id))
            .filter(entity::notification_preference::Column::EmailOnNewVolume.eq(true))
            .order_by_asc(entity::notification_preference::Column::UserId)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, user)| user)
            .map(|user| Subscriber {
                user_id: user.id,
                name: user.name,
                email: user.email,
            })
            .collect())
    }

    async fn find(
        &self,
        user_id: i32,
        title_id: i32,
    ) -> Result<Option<entity::notification_preference::Model>, DbErr> {
        entity::prelude::NotificationPreference::find()
            .filter(entity::notification_preference::Column::UserId.eq(user_id))
            .filter(entity::notification_preference::Column::TitleId.eq(title_id))
            .one(self.db)
            .await
    }
}
