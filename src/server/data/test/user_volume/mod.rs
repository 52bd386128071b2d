use crate::server::{data::user_volume::UserVolumeRepository, model::library::VolumeProgress};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod mark_notified;
mod owned_counts_by_title;
mod set_owned;
