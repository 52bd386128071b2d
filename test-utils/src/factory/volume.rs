//! Volume factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for volumes. The title must already exist.
pub struct VolumeFactory<'a> {
    db: &'a DatabaseConnection,
    title_id: i32,
    number: i32,
    title: Option<String>,
}

impl<'a> VolumeFactory<'a> {
    /// Defaults: a unique number and no label.
    pub fn new(db: &'a DatabaseConnection, title_id: i32) -> Self {
        Self {
            db,
            title_id,
            number: next_id() as i32,
            title: None,
        }
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub async fn build(self) -> Result<entity::volume::Model, DbErr> {
        let now = Utc::now();
        entity::volume::ActiveModel {
            title_id: ActiveValue::Set(self.title_id),
            number: ActiveValue::Set(self.number),
            title: ActiveValue::Set(self.title),
            cover_image: ActiveValue::Set(None),
            release_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_volume(
    db: &DatabaseConnection,
    title_id: i32,
    number: i32,
) -> Result<entity::volume::Model, DbErr> {
    VolumeFactory::new(db, title_id).number(number).build().await
}
