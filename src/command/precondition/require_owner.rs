use serenity::all::UserId;
use serenity::async_trait;
use std::collections::HashSet;

use crate::{
    command::{
        context::InvocationContext,
        precondition::{Precondition, PreconditionResult},
    },
    error::AppError,
};

/// Restricts a command to the bot owners, denying everyone else silently.
pub struct RequireOwner {
    owner_ids: HashSet<UserId>,
}

impl RequireOwner {
    pub fn new(owner_ids: HashSet<UserId>) -> Self {
        Self { owner_ids }
    }
}

#[async_trait]
impl Precondition for RequireOwner {
    fn name(&self) -> &'static str {
        "require_owner"
    }

    async fn check(&self, ctx: &InvocationContext) -> Result<PreconditionResult, AppError> {
        if !self.owner_ids.contains(&ctx.author_id) {
            return Ok(PreconditionResult::denied_silently());
        }

        Ok(PreconditionResult::Allowed)
    }
}
