use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251020_000001_create_user_table::User, m20251020_000004_create_title_table::Title};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationPreference::Table)
                    .if_not_exists()
                    .col(pk_auto(NotificationPreference::Id))
                    .col(integer(NotificationPreference::UserId))
                    .col(integer(NotificationPreference::TitleId))
                    .col(boolean(NotificationPreference::EmailOnNewVolume).default(false))
                    .col(
                        timestamp_with_time_zone(NotificationPreference::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(NotificationPreference::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_preference_user_id")
                            .from(NotificationPreference::Table, NotificationPreference::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_preference_title_id")
                            .from(NotificationPreference::Table, NotificationPreference::TitleId)
                            .to(Title::Table, Title::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notification_preference_user_id_title_id")
                    .table(NotificationPreference::Table)
                    .col(NotificationPreference::UserId)
                    .col(NotificationPreference::TitleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationPreference::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NotificationPreference {
    Table,
    Id,
    UserId,
    TitleId,
    EmailOnNewVolume,
    CreatedAt,
    UpdatedAt,
}
