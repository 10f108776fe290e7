use serenity::all::{Context, EventHandler, Guild, GuildId, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::{command::dispatch::CommandDispatcher, model::points::PointEvent};

pub mod guild;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub dispatcher: Arc<CommandDispatcher>,
    /// Queue of the point earning service.
    pub points: mpsc::Sender<PointEvent>,
    /// Queue of the guild ban service.
    pub bans: mpsc::Sender<GuildId>,
}

impl Handler {
    pub fn new(
        dispatcher: Arc<CommandDispatcher>,
        points: mpsc::Sender<PointEvent>,
        bans: mpsc::Sender<GuildId>,
    ) -> Self {
        Self {
            dispatcher,
            points,
            bans,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.dispatcher.prefix()).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.bans, ctx, guild, is_new).await;
    }

    /// Called for every message the bot can see
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.dispatcher, &self.points, ctx, message).await;
    }
}
