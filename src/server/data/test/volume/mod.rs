use crate::server::{
    data::volume::VolumeRepository,
    model::volume::{NewVolumeParam, UpdateVolumeParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod number_exists;
mod update;
