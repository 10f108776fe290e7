use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPoints::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPoints::Id))
                    .col(big_integer(UserPoints::GuildId))
                    .col(big_integer(UserPoints::UserId))
                    .col(big_integer(UserPoints::Points).default(0))
                    .col(timestamp(UserPoints::LastEarnedAt))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_points_guild_user_unique")
                            .col(UserPoints::GuildId)
                            .col(UserPoints::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserPoints::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserPoints {
    Table,
    Id,
    GuildId,
    UserId,
    Points,
    LastEarnedAt,
}
