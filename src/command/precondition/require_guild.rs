use serenity::async_trait;

use crate::{
    command::{
        context::InvocationContext,
        precondition::{Precondition, PreconditionResult},
    },
    error::AppError,
};

pub const GUILD_ONLY_REASON: &str = "This command can only be used in a server.";

/// Denies commands sent as direct messages.
pub struct RequireGuild;

#[async_trait]
impl Precondition for RequireGuild {
    fn name(&self) -> &'static str {
        "require_guild"
    }

    async fn check(&self, ctx: &InvocationContext) -> Result<PreconditionResult, AppError> {
        if ctx.guild_id.is_none() {
            return Ok(PreconditionResult::denied(GUILD_ONLY_REASON));
        }

        Ok(PreconditionResult::Allowed)
    }
}
