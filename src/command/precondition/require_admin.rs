use serenity::async_trait;

use crate::{
    command::{
        context::InvocationContext,
        precondition::{Precondition, PreconditionResult},
    },
    error::AppError,
};

pub const ADMIN_ONLY_REASON: &str = "You need the Administrator permission to use this command.";

/// Denies invokers without the Administrator permission in the guild.
pub struct RequireAdmin;

#[async_trait]
impl Precondition for RequireAdmin {
    fn name(&self) -> &'static str {
        "require_admin"
    }

    async fn check(&self, ctx: &InvocationContext) -> Result<PreconditionResult, AppError> {
        if !ctx.author_is_admin {
            return Ok(PreconditionResult::denied(ADMIN_ONLY_REASON));
        }

        Ok(PreconditionResult::Allowed)
    }
}
