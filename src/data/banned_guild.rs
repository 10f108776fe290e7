use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use serenity::all::GuildId;

/// Guilds the bot refuses to stay in.
pub struct BannedGuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannedGuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bans a guild, replacing the reason if it was already banned
    pub async fn ban(
        &self,
        guild_id: GuildId,
        reason: Option<String>,
    ) -> Result<entity::banned_guild::Model, DbErr> {
        entity::prelude::BannedGuild::insert(entity::banned_guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.get() as i64),
            reason: ActiveValue::Set(reason),
            banned_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::banned_guild::Column::GuildId)
                .update_columns([
                    entity::banned_guild::Column::Reason,
                    entity::banned_guild::Column::BannedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Lifts a guild ban
    ///
    /// # Returns
    /// - `Ok(true)`: The guild was banned and is no longer
    /// - `Ok(false)`: The guild was not banned
    /// - `Err(DbErr)`: Database error during delete
    pub async fn unban(&self, guild_id: GuildId) -> Result<bool, DbErr> {
        let result = entity::prelude::BannedGuild::delete_many()
            .filter(entity::banned_guild::Column::GuildId.eq(guild_id.get() as i64))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn is_banned(&self, guild_id: GuildId) -> Result<bool, DbErr> {
        let record = entity::prelude::BannedGuild::find()
            .filter(entity::banned_guild::Column::GuildId.eq(guild_id.get() as i64))
            .one(self.db)
            .await?;

        Ok(record.is_some())
    }
}
