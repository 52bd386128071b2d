//! SeaORM entity definitions for the Kushon schema.

pub mod prelude;

pub mod notification_preference;
pub mod publisher;
pub mod title;
pub mod user;
pub mod user_role;
pub mod user_volume;
pub mod volume;
