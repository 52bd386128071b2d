use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publisher::Table)
                    .if_not_exists()
                    .col(pk_auto(Publisher::Id))
                    .col(string_uniq(Publisher::Name))
                    .col(string_null(Publisher::Country))
                    .col(
                        timestamp_with_time_zone(Publisher::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Publisher::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Publisher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Publisher {
    Table,
    Id,
    Name,
    Country,
    CreatedAt,
    UpdatedAt,
}
