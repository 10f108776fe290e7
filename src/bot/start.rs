use serenity::all::{Client, GatewayIntents};
use serenity::cache::Settings as CacheSettings;
use serenity::http::Http;
use std::sync::Arc;

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Messages kept per channel in the gateway cache.
const CACHED_MESSAGES: usize = 1000;

/// Initializes the Discord bot client
///
/// Builds the client without connecting so its HTTP client can be handed to services that
/// run alongside the gateway.
///
/// # Arguments
/// - `config` - Configuration holding the bot token
/// - `handler` - Gateway event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start, and its HTTP client
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, handler: Handler) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is privileged and must be enabled in the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut cache_settings = CacheSettings::default();
    cache_settings.max_messages = CACHED_MESSAGES;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .cache_settings(cache_settings)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and runs until the shard manager shuts down
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
