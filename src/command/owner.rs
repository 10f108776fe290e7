use sea_orm::DatabaseConnection;
use serenity::all::GuildId;
use serenity::async_trait;
use tokio::sync::mpsc;

use crate::{
    command::{context::InvocationContext, Command},
    data::banned_guild::BannedGuildRepository,
    error::{command::CommandError, AppError},
    model::module::Module,
    util::parse::parse_guild_id,
};

/// Bans a guild and hands it to the guild ban service so the bot leaves it.
pub struct GuildBan {
    db: DatabaseConnection,
    bans: mpsc::Sender<GuildId>,
}

impl GuildBan {
    pub fn new(db: DatabaseConnection, bans: mpsc::Sender<GuildId>) -> Self {
        Self { db, bans }
    }
}

#[async_trait]
impl Command for GuildBan {
    fn name(&self) -> &'static str {
        "guildban"
    }

    fn module(&self) -> Module {
        Module::Owner
    }

    fn summary(&self) -> &'static str {
        "Bans a server and leaves it."
    }

    fn usage(&self) -> &'static str {
        "<guild id> [reason]"
    }

    async fn run(&self, ctx: &InvocationContext) -> Result<String, AppError> {
        let raw = ctx.arg(0).ok_or(CommandError::MissingArgument("guild id"))?;
        let guild_id = parse_guild_id(raw)?;
        let reason = ctx.rest(1);

        BannedGuildRepository::new(&self.db)
            .ban(guild_id, reason)
            .await?;
        tracing::info!("Guild {} banned by {}", guild_id, ctx.author_id);

        if let Err(e) = self.bans.send(guild_id).await {
            tracing::warn!("Guild ban service is not running: {}", e);
        }

        Ok(format!("Banned guild `{}`.", guild_id))
    }
}

pub struct GuildUnban {
    db: DatabaseConnection,
}

impl GuildUnban {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Command for GuildUnban {
    fn name(&self) -> &'static str {
        "guildunban"
    }

    fn module(&self) -> Module {
        Module::Owner
    }

    fn summary(&self) -> &'static str {
        "Lifts a server ban."
    }

    fn usage(&self) -> &'static str {
        "<guild id>"
    }

    async fn run(&self, ctx: &InvocationContext) -> Result<String, AppError> {
        let raw = ctx.arg(0).ok_or(CommandError::MissingArgument("guild id"))?;
        let guild_id = parse_guild_id(raw)?;

        if !BannedGuildRepository::new(&self.db).unban(guild_id).await? {
            return Ok(format!("Guild `{}` is not banned.", guild_id));
        }

        tracing::info!("Guild {} unbanned by {}", guild_id, ctx.author_id);
        Ok(format!("Unbanned guild `{}`.", guild_id))
    }
}
