//! Prefix command framework.
//!
//! Commands implement [`Command`] and are registered with a [`dispatch::CommandDispatcher`]
//! together with the ordered list of preconditions that guard them. The command bodies live
//! in one file per module.

pub mod admin;
pub mod context;
pub mod dispatch;
pub mod fun;
pub mod general;
pub mod owner;
pub mod precondition;
pub mod registry;

#[cfg(test)]
mod test;

use serenity::async_trait;

use crate::{command::context::InvocationContext, error::AppError, model::module::Module};

#[async_trait]
pub trait Command: Send + Sync {
    /// Canonical name, lowercase.
    fn name(&self) -> &'static str;

    /// Alternative names, lowercase.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn module(&self) -> Module;

    /// One-line description shown by `help`.
    fn summary(&self) -> &'static str;

    /// Argument synopsis shown by `help`, e.g. `<module>`.
    fn usage(&self) -> &'static str {
        ""
    }

    /// Runs the command body.
    ///
    /// # Returns
    /// - `Ok(String)` - Reply to send; an empty string sends nothing
    /// - `Err(AppError)` - The invocation failed
    async fn run(&self, ctx: &InvocationContext) -> Result<String, AppError>;
}
