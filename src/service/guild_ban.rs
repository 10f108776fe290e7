//! Keeps the bot out of banned guilds.
//!
//! Guild ids arrive from the gateway `guild_create` event and from the owner ban command.
//! Every id is checked against the ban list and the bot leaves any banned guild.

use sea_orm::DatabaseConnection;
use serenity::all::GuildId;
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{data::banned_guild::BannedGuildRepository, error::AppError, shutdown::Shutdown};

/// Ability to leave a guild.
#[async_trait]
pub trait GuildExit: Send + Sync {
    async fn leave(&self, guild_id: GuildId) -> Result<(), AppError>;
}

#[async_trait]
impl GuildExit for Http {
    async fn leave(&self, guild_id: GuildId) -> Result<(), AppError> {
        guild_id.leave(self).await?;
        Ok(())
    }
}

pub struct GuildBanService {
    db: DatabaseConnection,
    exit: Arc<dyn GuildExit>,
}

impl GuildBanService {
    pub fn new(db: DatabaseConnection, exit: Arc<dyn GuildExit>) -> Self {
        Self { db, exit }
    }

    /// Spawns the service loop.
    ///
    /// The loop exits once shutdown is triggered or every sender has been dropped.
    pub fn start(self, mut guilds: mpsc::Receiver<GuildId>, shutdown: Shutdown) -> JoinHandle<()> {
        tokio::spawn(async move {
            tracing::info!("Guild ban service started");

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    guild_id = guilds.recv() => {
                        let Some(guild_id) = guild_id else { break };

                        if let Err(e) = self.enforce(guild_id).await {
                            tracing::error!("Failed to enforce ban for guild {}: {}", guild_id, e);
                        }
                    }
                }
            }

            tracing::info!("Guild ban service stopped");
        })
    }

    /// Leaves the guild if it is banned.
    ///
    /// # Returns
    /// - `Ok(true)` - The guild is banned and the bot left it
    /// - `Ok(false)` - The guild is not banned
    /// - `Err(AppError)` - Database lookup or leave request failed
    pub async fn enforce(&self, guild_id: GuildId) -> Result<bool, AppError> {
        if !BannedGuildRepository::new(&self.db).is_banned(guild_id).await? {
            return Ok(false);
        }

        tracing::info!("Leaving banned guild {}", guild_id);
        self.exit.leave(guild_id).await?;

        Ok(true)
    }
}
