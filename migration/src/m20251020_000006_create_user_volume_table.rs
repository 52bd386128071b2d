use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251020_000001_create_user_table::User, m20251020_000005_create_volume_table::Volume};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserVolume::Table)
                    .if_not_exists()
                    .col(pk_auto(UserVolume::Id))
                    .col(integer(UserVolume::UserId))
                    .col(integer(UserVolume::VolumeId))
                    .col(boolean(UserVolume::Owned).default(false))
                    .col(boolean(UserVolume::Notified).default(false))
                    .col(
                        timestamp_with_time_zone(UserVolume::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(UserVolume::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_volume_user_id")
                            .from(UserVolume::Table, UserVolume::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_volume_volume_id")
                            .from(UserVolume::Table, UserVolume::VolumeId)
                            .to(Volume::Table, Volume::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_volume_user_id_volume_id")
                    .table(UserVolume::Table)
                    .col(UserVolume::UserId)
                    .col(UserVolume::VolumeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserVolume::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserVolume {
    Table,
    Id,
    UserId,
    VolumeId,
    Owned,
    Notified,
    CreatedAt,
    UpdatedAt,
}
