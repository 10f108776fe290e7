use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BannedGuild::Table)
                    .if_not_exists()
                    .col(pk_auto(BannedGuild::Id))
                    .col(big_integer_uniq(BannedGuild::GuildId))
                    .col(string_null(BannedGuild::Reason))
                    .col(timestamp(BannedGuild::BannedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BannedGuild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BannedGuild {
    Table,
    Id,
    GuildId,
    Reason,
    BannedAt,
}
