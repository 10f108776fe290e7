use serenity::all::GuildId;
use serenity::async_trait;
use std::sync::Arc;

use crate::{
    command::{
        context::InvocationContext,
        precondition::{Precondition, PreconditionResult},
    },
    error::AppError,
};

/// Read access to per-guild module enablement.
#[async_trait]
pub trait ModuleRegistry: Send + Sync {
    /// Returns `true` only if the module has an explicit disabled record for the guild.
    ///
    /// A missing record means enabled. Implementations must be safe to call concurrently.
    async fn is_module_disabled(&self, guild_id: GuildId, module: &str) -> Result<bool, AppError>;
}

/// Denies, silently, any command whose module is disabled in the invoking guild.
///
/// Every check performs a fresh registry lookup so toggles apply to the very next command.
/// Direct messages have no guild settings and are always allowed. Registry failures
/// propagate to the dispatcher unchanged.
pub struct RequireEnabled {
    registry: Arc<dyn ModuleRegistry>,
}

impl RequireEnabled {
    pub fn new(registry: Arc<dyn ModuleRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Precondition for RequireEnabled {
    fn name(&self) -> &'static str {
        "require_enabled"
    }

    async fn check(&self, ctx: &InvocationContext) -> Result<PreconditionResult, AppError> {
        let Some(guild_id) = ctx.guild_id else {
            return Ok(PreconditionResult::Allowed);
        };

        let disabled = self
            .registry
            .is_module_disabled(guild_id, ctx.module.name())
            .await?;

        if disabled {
            return Ok(PreconditionResult::denied_silently());
        }

        Ok(PreconditionResult::Allowed)
    }
}
