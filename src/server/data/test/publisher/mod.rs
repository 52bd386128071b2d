use crate::server::{
    data::publisher::PublisherRepository,
    model::publisher::{CreatePublisherParam, UpdatePublisherParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_titles;
mod create;
mod delete;
mod update;
