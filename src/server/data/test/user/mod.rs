use crate::{
    model::user::Role,
    server::{data::user::UserRepository, model::user::CreateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find;
mod get_all_paginated;
mod roles;
