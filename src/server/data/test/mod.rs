mod notification_preference;
mod publisher;
mod title;
mod user;
mod user_volume;
mod volume;
