use crate::{
    model::title::TitleStatus,
    server::{
        data::title::TitleRepository,
        model::{
            title::{CreateTitleParam, TitleFilter, UpdateTitleParam},
            volume::NewVolumeParam,
        },
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod get_all;
mod update;

fn new_volume(number: i32) -> NewVolumeParam {
    NewVolumeParam {
        number,
        title: None,
        release_at: None,
    }
}
