use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use serenity::all::GuildId;

/// Module-enablement records, one row per (guild, module) that has ever been toggled.
///
/// A missing row means the module is enabled.
pub struct GuildModuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildModuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a module has been disabled in a guild
    ///
    /// # Arguments
    /// - `guild_id`: Guild the command was invoked in
    /// - `module`: Module name as stored, e.g. `"Fun"`
    ///
    /// # Returns
    /// - `Ok(true)`: An explicit disabled record exists
    /// - `Ok(false)`: The record is enabled or absent
    /// - `Err(DbErr)`: Database error during query
    pub async fn is_module_disabled(&self, guild_id: GuildId, module: &str) -> Result<bool, DbErr> {
        let record = self.find(guild_id, module).await?;

        Ok(record.is_some_and(|r| r.disabled))
    }

    pub async fn find(
        &self,
        guild_id: GuildId,
        module: &str,
    ) -> Result<Option<entity::guild_module::Model>, DbErr> {
        entity::prelude::GuildModule::find()
            .filter(entity::guild_module::Column::GuildId.eq(guild_id.get() as i64))
            .filter(entity::guild_module::Column::Module.eq(module))
            .one(self.db)
            .await
    }

    /// Creates or updates the enablement record for a module in a guild
    ///
    /// Written as a single upsert on the (guild, module) unique index so concurrent toggles
    /// of the same module never collide on insert.
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored record
    /// - `Err(DbErr)`: Database error during upsert
    pub async fn set_module_disabled(
        &self,
        guild_id: GuildId,
        module: &str,
        disabled: bool,
    ) -> Result<entity::guild_module::Model, DbErr> {
        entity::prelude::GuildModule::insert(entity::guild_module::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.get() as i64),
            module: ActiveValue::Set(module.to_string()),
            disabled: ActiveValue::Set(disabled),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::guild_module::Column::GuildId,
                entity::guild_module::Column::Module,
            ])
            .update_columns([
                entity::guild_module::Column::Disabled,
                entity::guild_module::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Gets the names of every module currently disabled in a guild, sorted by name
    pub async fn get_disabled_modules(&self, guild_id: GuildId) -> Result<Vec<String>, DbErr> {
        let records = entity::prelude::GuildModule::find()
            .filter(entity::guild_module::Column::GuildId.eq(guild_id.get() as i64))
            .filter(entity::guild_module::Column::Disabled.eq(true))
            .order_by_asc(entity::guild_module::Column::Module)
            .all(self.db)
            .await?;

        Ok(records.into_iter().map(|r| r.module).collect())
    }
}
