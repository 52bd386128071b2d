use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Publication status of a title.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum TitleStatus {
    #[default]
    Ongoing,
    Completed,
    Hiatus,
}

impl TitleStatus {
    pub const ALL: [TitleStatus; 3] = [
        TitleStatus::Ongoing,
        TitleStatus::Completed,
        TitleStatus::Hiatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TitleStatus::Ongoing => "ONGOING",
            TitleStatus::Completed => "COMPLETED",
            TitleStatus::Hiatus => "HIATUS",
        }
    }

    /// Human readable label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            TitleStatus::Ongoing => "Ongoing",
            TitleStatus::Completed => "Completed",
            TitleStatus::Hiatus => "On hiatus",
        }
    }
}

impl fmt::Display for TitleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TitleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ONGOING" => Ok(TitleStatus::Ongoing),
            "COMPLETED" => Ok(TitleStatus::Completed),
            "HIATUS" => Ok(TitleStatus::Hiatus),
            other => Err(format!("Unknown title status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VolumeDto {
    pub id: i32,
    pub title_id: i32,
    pub number: i32,
    pub title: Option<String>,
    pub cover_image: Option<String>,
    pub release_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TitleDto {
    pub id: i32,
    pub name: String,
    pub synopsis: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub slug: String,
    pub cover_image: Option<String>,
    pub status: TitleStatus,
    pub publisher_id: i32,
    pub volume_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present on single-title responses, omitted from listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<VolumeDto>>,
}

/// Volume to create, either alongside a new title or on its own.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewVolumeDto {
    pub number: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTitleDto {
    pub name: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    pub publisher_id: i32,
    #[serde(default)]
    pub status: Option<TitleStatus>,
    #[serde(default)]
    pub volumes: Vec<NewVolumeDto>,
}

/// Partial title update. When `volumes` is present it replaces the title's volume list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTitleDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub publisher_id: Option<i32>,
    #[serde(default)]
    pub status: Option<TitleStatus>,
    #[serde(default)]
    pub volumes: Option<Vec<NewVolumeDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateVolumeDto {
    #[serde(default)]
    pub number: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_at: Option<DateTime<Utc>>,
}
