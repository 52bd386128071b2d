//! Title domain models and parameters.
//!
//! A title is the tracked series. Listings carry a volume count, single-title
//! responses carry the full volume list.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::title::{TitleDto, TitleStatus},
    server::model::volume::{NewVolumeParam, Volume},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub id: i32,
    pub name: String,
    /// Markdown synopsis.
    pub synopsis: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    /// URL slug derived from the name, unique across titles.
    pub slug: String,
    pub cover_image: Option<String>,
    pub status: TitleStatus,
    pub publisher_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Title {
    /// Converts an entity model to a title domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Title)` - The converted title
    /// - `Err(DbErr::Type)` - The stored status is not a known `TitleStatus`
    pub fn from_entity(entity: entity::title::Model) -> Result<Self, DbErr> {
        let status = entity.status.parse::<TitleStatus>().map_err(DbErr::Type)?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            synopsis: entity.synopsis,
            author: entity.author,
            genre: entity.genre,
            slug: entity.slug,
            cover_image: entity.cover_image,
            status,
            publisher_id: entity.publisher_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts to a DTO. `volumes` is `Some` only for single-title responses.
    pub fn into_dto(self, volume_count: u64, volumes: Option<Vec<Volume>>) -> TitleDto {
        TitleDto {
            id: self.id,
            name: self.name,
            synopsis: self.synopsis,
            author: self.author,
            genre: self.genre,
            slug: self.slug,
            cover_image: self.cover_image,
            status: self.status,
            publisher_id: self.publisher_id,
            volume_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
            volumes: volumes.map(|v| v.into_iter().map(Volume::into_dto).collect()),
        }
    }
}

/// Title listing entry with the number of volumes it has.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleWithCount {
    pub title: Title,
    pub volume_count: u64,
}

impl TitleWithCount {
    pub fn into_dto(self) -> TitleDto {
        self.title.into_dto(self.volume_count, None)
    }
}

/// Title together with its volumes ordered by number.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleWithVolumes {
    pub title: Title,
    pub volumes: Vec<Volume>,
}

impl TitleWithVolumes {
    pub fn into_dto(self) -> TitleDto {
        let count = self.volumes.len() as u64;
        self.title.into_dto(count, Some(self.volumes))
    }
}

/// Validated title to insert along with its initial volumes.
#[derive(Debug, Clone)]
pub struct CreateTitleParam {
    pub name: String,
    pub synopsis: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub slug: String,
    pub status: TitleStatus,
    pub publisher_id: i32,
    pub volumes: Vec<NewVolumeParam>,
}

/// Column changes for a title; `None` keeps the stored value.
///
/// The nullable text columns use `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTitleParam {
    pub name: Option<String>,
    pub synopsis: Option<Option<String>>,
    pub author: Option<Option<String>>,
    pub genre: Option<Option<String>>,
    pub slug: Option<String>,
    pub status: Option<TitleStatus>,
    pub publisher_id: Option<i32>,
}

/// Filters accepted by the title listing.
#[derive(Debug, Clone, Default)]
pub struct TitleFilter {
    pub status: Option<TitleStatus>,
    pub publisher_id: Option<i32>,
    /// Substring of the title name, matched case-insensitively (ASCII only on SQLite).
    pub search: Option<String>,
}
