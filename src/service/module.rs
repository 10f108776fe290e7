//! Per-guild module enablement.
//!
//! `ModuleService` backs the admin commands that list and toggle modules. `GuildModuleRegistry`
//! is the database-backed [`ModuleRegistry`] handed to the enablement gate at startup.

use sea_orm::DatabaseConnection;
use serenity::all::GuildId;
use serenity::async_trait;

use crate::{
    command::precondition::ModuleRegistry,
    data::guild_module::GuildModuleRepository,
    error::{command::CommandError, AppError},
    model::module::{Module, ModuleStatus},
};

pub struct ModuleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModuleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every module with its state in a guild, in display order.
    pub async fn list(&self, guild_id: GuildId) -> Result<Vec<ModuleStatus>, AppError> {
        let disabled = GuildModuleRepository::new(self.db)
            .get_disabled_modules(guild_id)
            .await?;

        Ok(Module::ALL
            .into_iter()
            .map(|module| ModuleStatus {
                module,
                disabled: disabled.iter().any(|name| name == module.name()),
            })
            .collect())
    }

    /// Enables or disables a module in a guild by user-supplied name.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to change
    /// - `name` - Module name as typed by the user, matched case-insensitively
    /// - `disabled` - New state
    ///
    /// # Returns
    /// - `Ok(Module)` - The module whose state was stored
    /// - `Err(CommandError::UnknownModule)` - No module has that name
    /// - `Err(CommandError::ModuleNotToggleable)` - The module must stay enabled
    /// - `Err(AppError::DbErr)` - Database error while storing the state
    pub async fn set_disabled(
        &self,
        guild_id: GuildId,
        name: &str,
        disabled: bool,
    ) -> Result<Module, AppError> {
        let module = Module::from_name(name)
            .ok_or_else(|| CommandError::UnknownModule(name.trim().to_string()))?;

        if !module.toggleable() {
            return Err(CommandError::ModuleNotToggleable(module.name()).into());
        }

        GuildModuleRepository::new(self.db)
            .set_module_disabled(guild_id, module.name(), disabled)
            .await?;

        tracing::info!(
            "Module {} {} in guild {}",
            module,
            if disabled { "disabled" } else { "enabled" },
            guild_id
        );

        Ok(module)
    }
}

/// [`ModuleRegistry`] backed by the root database.
///
/// Holds its own pooled connection so it can be shared across concurrent invocations.
#[derive(Clone)]
pub struct GuildModuleRegistry {
    db: DatabaseConnection,
}

impl GuildModuleRegistry {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ModuleRegistry for GuildModuleRegistry {
    async fn is_module_disabled(&self, guild_id: GuildId, module: &str) -> Result<bool, AppError> {
        let disabled = GuildModuleRepository::new(&self.db)
            .is_module_disabled(guild_id, module)
            .await?;

        Ok(disabled)
    }
}
