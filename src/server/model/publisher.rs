use chrono::{DateTime, Utc};

use crate::model::publisher::{CreatePublisherDto, PublisherDto, UpdatePublisherDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Publisher {
    pub id: i32,
    pub name: String,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Publisher {
    pub fn from_entity(entity: entity::publisher::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            country: entity.country,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PublisherDto {
        PublisherDto {
            id: self.id,
            name: self.name,
            country: self.country,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Publisher to insert. The name is expected to be trimmed and validated.
#[derive(Debug, Clone)]
pub struct CreatePublisherParam {
    pub name: String,
    pub country: Option<String>,
}

impl CreatePublisherParam {
    pub fn from_dto(dto: CreatePublisherDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            country: normalize_country(dto.country),
        }
    }
}

/// Partial publisher update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePublisherParam {
    pub name: Option<String>,
    pub country: Option<String>,
}

impl UpdatePublisherParam {
    pub fn from_dto(dto: UpdatePublisherDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            country: normalize_country(dto.country),
        }
    }
}

fn normalize_country(country: Option<String>) -> Option<String> {
    country
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}
