//! Notification preference factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a preference row for the user and title.
pub async fn create_preference(
    db: &DatabaseConnection,
    user_id: i32,
    title_id: i32,
    email_on_new_volume: bool,
) -> Result<entity::notification_preference::Model, DbErr> {
    let now = Utc::now();
    entity::notification_preference::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        title_id: ActiveValue::Set(title_id),
        email_on_new_volume: ActiveValue::Set(email_on_new_volume),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
