use serenity::all::{ChannelId, GuildId, UserId};

use crate::{error::AppError, model::module::Module};

/// A chat message as seen by the dispatcher, stripped of gateway types.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// `None` for direct messages.
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    /// Whether the author holds the Administrator permission in the guild.
    pub author_is_admin: bool,
    pub content: String,
}

/// Everything known about a single command invocation.
///
/// Built once per parsed command, shared by every precondition and the command body, then
/// dropped when the invocation completes.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub author_is_admin: bool,
    /// Module owning the resolved command.
    pub module: Module,
    /// Canonical name of the resolved command, even when invoked by alias.
    pub command: &'static str,
    pub args: Vec<String>,
}

impl InvocationContext {
    /// Guild of a command registered behind `RequireGuild`.
    pub fn guild(&self) -> Result<GuildId, AppError> {
        self.guild_id.ok_or_else(|| {
            AppError::InternalError(format!("{} reached its body outside a guild", self.command))
        })
    }

    /// Returns the argument at `index`, or `None` if it was not supplied.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Joins every argument from `index` on with single spaces.
    pub fn rest(&self, index: usize) -> Option<String> {
        let rest = self.args.get(index..)?;
        if rest.is_empty() {
            return None;
        }
        Some(rest.join(" "))
    }
}
