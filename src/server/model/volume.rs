//! Volume domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::title::{NewVolumeDto, UpdateVolumeDto, VolumeDto};

/// A numbered volume of a title.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    pub id: i32,
    pub title_id: i32,
    /// Volume number, unique within the title.
    pub number: i32,
    /// Optional volume subtitle.
    pub title: Option<String>,
    /// Public path of the uploaded cover, e.g. `/uploads/covers/<file>`.
    pub cover_image: Option<String>,
    pub release_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Volume {
    pub fn from_entity(entity: entity::volume::Model) -> Self {
        Self {
            id: entity.id,
            title_id: entity.title_id,
            number: entity.number,
            title: entity.title,
            cover_image: entity.cover_image,
            release_at: entity.release_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> VolumeDto {
        VolumeDto {
            id: self.id,
            title_id: self.title_id,
            number: self.number,
            title: self.title,
            cover_image: self.cover_image,
            release_at: self.release_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Display label used in emails and the UI, e.g. `Vol. 3`.
    pub fn label(&self) -> String {
        match &self.title {
            Some(subtitle) => format!("Vol. {}: {}", self.number, subtitle),
            None => format!("Vol. {}", self.number),
        }
    }
}

/// Volume to insert, alone or as part of a title.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVolumeParam {
    pub number: i32,
    pub title: Option<String>,
    pub release_at: Option<DateTime<Utc>>,
}

impl NewVolumeParam {
    pub fn from_dto(dto: NewVolumeDto) -> Self {
        Self {
            number: dto.number,
            title: trim_label(dto.title),
            release_at: dto.release_at,
        }
    }
}

/// Partial volume update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateVolumeParam {
    pub number: Option<i32>,
    pub title: Option<String>,
    pub release_at: Option<DateTime<Utc>>,
}

impl UpdateVolumeParam {
    pub fn from_dto(dto: UpdateVolumeDto) -> Self {
        Self {
            number: dto.number,
            title: trim_label(dto.title),
            release_at: dto.release_at,
        }
    }
}

fn trim_label(label: Option<String>) -> Option<String> {
    label.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// Changes made while replacing a title's volume list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeSync {
    /// Volumes whose number was not present before.
    pub created: Vec<Volume>,
    /// Existing volumes whose label or release date was rewritten.
    pub updated: Vec<Volume>,
    /// Volumes absent from the new list, already deleted.
    pub removed: Vec<Volume>,
}
