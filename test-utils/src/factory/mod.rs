//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories never create
//! their foreign-key parents implicitly; use `helpers` for that.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let admin = factory::user::UserFactory::new(&db).admin().build().await?;
//! let (publisher, title) = factory::helpers::create_title_with_publisher(&db).await?;
//! let volume = factory::volume::VolumeFactory::new(&db, title.id).number(3).build().await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with their roles
//! - `publisher` - Publishers
//! - `title` - Titles
//! - `volume` - Volumes
//! - `user_volume` - Ownership/notification rows
//! - `notification_preference` - Per-title email preferences
//! - `helpers` - Unique id generation and multi-entity shortcuts

pub mod helpers;
pub mod notification_preference;
pub mod publisher;
pub mod title;
pub mod user;
pub mod user_volume;
pub mod volume;

pub use notification_preference::create_preference;
pub use publisher::create_publisher;
pub use title::create_title;
pub use user::{create_admin, create_user};
pub use user_volume::create_user_volume;
pub use volume::create_volume;
