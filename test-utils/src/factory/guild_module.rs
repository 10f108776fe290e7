//! Module-enablement record factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test module-enablement records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_module::GuildModuleFactory;
///
/// let record = GuildModuleFactory::new(&db)
///     .guild_id(987654321)
///     .module("Fun")
///     .disabled(true)
///     .build()
///     .await?;
/// ```
pub struct GuildModuleFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    module: String,
    disabled: bool,
}

impl<'a> GuildModuleFactory<'a> {
    /// Creates a new GuildModuleFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented
    /// - module: `"General"`
    /// - disabled: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id() as i64,
            module: "General".to_string(),
            disabled: true,
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Builds and inserts the record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_module::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_module::Model, DbErr> {
        entity::guild_module::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            module: ActiveValue::Set(self.module),
            disabled: ActiveValue::Set(self.disabled),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a module-enablement record for the given guild and module.
///
/// Shorthand for `GuildModuleFactory::new(db).guild_id(..).module(..).disabled(..).build().await`.
pub async fn create_guild_module(
    db: &DatabaseConnection,
    guild_id: i64,
    module: impl Into<String>,
    disabled: bool,
) -> Result<entity::guild_module::Model, DbErr> {
    GuildModuleFactory::new(db)
        .guild_id(guild_id)
        .module(module)
        .disabled(disabled)
        .build()
        .await
}
