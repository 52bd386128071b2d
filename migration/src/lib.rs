pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_user_table;
mod m20251020_000002_create_user_role_table;
mod m20251020_000003_create_publisher_table;
mod m20251020_000004_create_title_table;
mod m20251020_000005_create_volume_table;
mod m20251020_000006_create_user_volume_table;
mod m20251021_000007_create_notification_preference_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_user_table::Migration),
            Box::new(m20251020_000002_create_user_role_table::Migration),
            Box::new(m20251020_000003_create_publisher_table::Migration),
            Box::new(m20251020_000004_create_title_table::Migration),
            Box::new(m20251020_000005_create_volume_table::Migration),
            Box::new(m20251020_000006_create_user_volume_table::Migration),
            Box::new(m20251021_000007_create_notification_preference_table::Migration),
        ]
    }
}
