//! Publisher factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PublisherFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    country: Option<String>,
}

impl<'a> PublisherFactory<'a> {
    /// Defaults: name `"Publisher {id}"`, country `"Japan"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Publisher {}", next_id()),
            country: Some("Japan".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn country(mut self, country: Option<&str>) -> Self {
        self.country = country.map(str::to_string);
        self
    }

    pub async fn build(self) -> Result<entity::publisher::Model, DbErr> {
        let now = Utc::now();
        entity::publisher::ActiveModel {
            name: ActiveValue::Set(self.name),
            country: ActiveValue::Set(self.country),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_publisher(db: &DatabaseConnection) -> Result<entity::publisher::Model, DbErr> {
    PublisherFactory::new(db).build().await
}
