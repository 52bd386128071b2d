use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000004_create_title_table::Title;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Volume::Table)
                    .if_not_exists()
                    .col(pk_auto(Volume::Id))
                    .col(integer(Volume::TitleId))
                    .col(integer(Volume::Number))
                    .col(string_null(Volume::Title))
                    .col(string_null(Volume::CoverImage))
                    .col(timestamp_with_time_zone_null(Volume::ReleaseAt))
                    .col(timestamp_with_time_zone(Volume::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Volume::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_volume_title_id")
                            .from(Volume::Table, Volume::TitleId)
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
                    .name("idx_volume_title_id_number")
                    .table(Volume::Table)
                    .col(Volume::TitleId)
                    .col(Volume::Number)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Volume::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Volume {
    Table,
    Id,
    TitleId,
    Number,
    Title,
    CoverImage,
    ReleaseAt,
    CreatedAt,
    UpdatedAt,
}
