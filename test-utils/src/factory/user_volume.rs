//! User volume (ownership) factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a `user_volume` row with the given flags.
pub async fn create_user_volume(
    db: &DatabaseConnection,
    user_id: i32,
    volume_id: i32,
    owned: bool,
    notified: bool,
) -> Result<entity::user_volume::Model, DbErr> {
    let now = Utc::now();
    entity::user_volume::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        volume_id: ActiveValue::Set(volume_id),
        owned: ActiveValue::Set(owned),
        notified: ActiveValue::Set(notified),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
