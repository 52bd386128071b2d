use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000003_create_publisher_table::Publisher;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Title::Table)
                    .if_not_exists()
                    .col(pk_auto(Title::Id))
                    .col(string(Title::Name))
                    .col(text_null(Title::Synopsis))
                    .col(string_null(Title::Author))
                    .col(string_null(Title::Genre))
                    .col(string_uniq(Title::Slug))
                    .col(string_null(Title::CoverImage))
                    .col(string(Title::Status).default("ONGOING"))
                    .col(integer(Title::PublisherId))
                    .col(timestamp_with_time_zone(Title::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Title::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_title_publisher_id")
                            .from(Title::Table, Title::PublisherId)
                            .to(Publisher::Table, Publisher::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Title::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Title {
    Table,
    Id,
    Name,
    Synopsis,
    Author,
    Genre,
    Slug,
    CoverImage,
    Status,
    PublisherId,
    CreatedAt,
    UpdatedAt,
}
