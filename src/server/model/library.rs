//! Per-user library tracking models.

use crate::{
    model::library::{LibraryTitleDto, VolumeProgressDto},
    server::model::title::Title,
};

/// Ownership state of one volume for one user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeProgress {
    pub volume_id: i32,
    pub owned: bool,
}

impl VolumeProgress {
    pub fn from_dto(dto: VolumeProgressDto) -> Self {
        Self {
            volume_id: dto.volume_id,
            owned: dto.owned,
        }
    }

    pub fn into_dto(self) -> VolumeProgressDto {
        VolumeProgressDto {
            volume_id: self.volume_id,
            owned: self.owned,
        }
    }
}

/// A title in a user's library with owned and total volume counts.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryTitle {
    pub title: Title,
    pub owned_count: u64,
    pub total_count: u64,
}

impl LibraryTitle {
    pub fn into_dto(self) -> LibraryTitleDto {
        LibraryTitleDto {
            owned_count: self.owned_count,
            total_count: self.total_count,
            title: self.title.into_dto(self.total_count, None),
        }
    }
}

/// Subscriber of a title's new-volume emails.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscriber {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

/// Outcome of one notification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationReport {
    /// Emails delivered.
    pub sent: usize,
    /// Subscriber/volume pairs already notified earlier.
    pub skipped: usize,
    /// Deliveries that failed and were logged.
    pub failed: usize,
}
