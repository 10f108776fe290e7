//! Checks evaluated before a command body runs.
//!
//! Every precondition implements [`Precondition`]. The dispatcher evaluates a command's
//! preconditions in registration order and stops at the first denial.

pub mod ratelimit;
pub mod require_admin;
pub mod require_enabled;
pub mod require_guild;
pub mod require_owner;

use serenity::async_trait;

use crate::{command::context::InvocationContext, error::AppError};

pub use ratelimit::Ratelimit;
pub use require_admin::RequireAdmin;
pub use require_enabled::{ModuleRegistry, RequireEnabled};
pub use require_guild::RequireGuild;
pub use require_owner::RequireOwner;

/// Outcome of a single precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreconditionResult {
    Allowed,
    /// The invocation may not proceed. An empty reason means deny silently.
    Denied(String),
}

impl PreconditionResult {
    pub fn denied(reason: impl Into<String>) -> Self {
        Self::Denied(reason.into())
    }

    /// A denial that shows nothing to the invoking user.
    pub fn denied_silently() -> Self {
        Self::Denied(String::new())
    }
}

#[async_trait]
pub trait Precondition: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Decides whether the invocation may proceed.
    ///
    /// Errors are not denials: the dispatcher treats them as a failed invocation and never
    /// runs the command body.
    async fn check(&self, ctx: &InvocationContext) -> Result<PreconditionResult, AppError>;
}
