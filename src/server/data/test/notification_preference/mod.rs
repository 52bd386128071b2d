use crate::server::data::notification_preference::NotificationPreferenceRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod subscribers;
mod upsert;
