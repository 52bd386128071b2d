pub use super::notification_preference::Entity as NotificationPreference;
pub use super::publisher::Entity as Publisher;
pub use super::title::Entity as Title;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
pub use super::user_volume::Entity as UserVolume;
pub use super::volume::Entity as Volume;
