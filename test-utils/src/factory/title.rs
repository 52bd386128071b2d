//! Title factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for titles. The publisher must already exist.
pub struct TitleFactory<'a> {
    db: &'a DatabaseConnection,
    publisher_id: i32,
    name: String,
    slug: String,
    status: String,
    genre: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> TitleFactory<'a> {
    /// Defaults: name `"Title {id}"`, slug `"title-{id}"`, status `ONGOING`,
    /// genre `"Shonen"`, created now.
    pub fn new(db: &'a DatabaseConnection, publisher_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            publisher_id,
            name: format!("Title {}", id),
            slug: format!("title-{}", id),
            status: "ONGOING".to_string(),
            genre: Some("Shonen".to_string()),
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn genre(mut self, genre: Option<&str>) -> Self {
        self.genre = genre.map(str::to_string);
        self
    }

    /// Overrides the creation timestamp, for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::title::Model, DbErr> {
        entity::title::ActiveModel {
            name: ActiveValue::Set(self.name),
            synopsis: ActiveValue::Set(None),
            author: ActiveValue::Set(Some("Test Author".to_string())),
            genre: ActiveValue::Set(self.genre),
            slug: ActiveValue::Set(self.slug),
            cover_image: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            publisher_id: ActiveValue::Set(self.publisher_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_title(
    db: &DatabaseConnection,
    publisher_id: i32,
) -> Result<entity::title::Model, DbErr> {
    TitleFactory::new(db, publisher_id).build().await
}
