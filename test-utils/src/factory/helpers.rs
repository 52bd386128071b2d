//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a publisher and a title belonging to it.
///
/// # Returns
/// - `Ok((publisher, title))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_title_with_publisher(
    db: &DatabaseConnection,
) -> Result<(entity::publisher::Model, entity::title::Model), DbErr> {
    let publisher = crate::factory::publisher::create_publisher(db).await?;
    let title = crate::factory::title::create_title(db, publisher.id).await?;

    Ok((publisher, title))
}

/// Creates a publisher, a title and `count` volumes numbered from 1.
///
/// # Returns
/// - `Ok((title, volumes))` - The title and its volumes in number order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_title_with_volumes(
    db: &DatabaseConnection,
    count: i32,
) -> Result<(entity::title::Model, Vec<entity::volume::Model>), DbErr> {
    let (_, title) = create_title_with_publisher(db).await?;

    let mut volumes = Vec::new();
    for number in 1..=count {
        let volume = crate::factory::volume::VolumeFactory::new(db, title.id)
            .number(number)
            .build()
            .await?;
        volumes.push(volume);
    }

    Ok((title, volumes))
}
