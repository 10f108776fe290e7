use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildModule::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildModule::Id))
                    .col(big_integer(GuildModule::GuildId))
                    .col(string(GuildModule::Module))
                    .col(boolean(GuildModule::Disabled).default(false))
                    .col(timestamp(GuildModule::UpdatedAt).default(Expr::current_timestamp()))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_guild_module_unique")
                            .col(GuildModule::GuildId)
                            .col(GuildModule::Module),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildModule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildModule {
    Table,
    Id,
    GuildId,
    Module,
    Disabled,
    UpdatedAt,
}
