use serenity::all::{Context, Guild, GuildId};
use tokio::sync::mpsc;

/// Handles guild availability and joins.
///
/// Every guild the bot sees is queued for the guild ban service, which leaves banned ones.
pub async fn handle_guild_create(
    bans: &mpsc::Sender<GuildId>,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}, member_count: {}",
        guild.name,
        guild.id,
        is_new,
        guild.member_count
    );

    if let Err(e) = bans.send(guild.id).await {
        tracing::error!("Failed to queue guild {} for ban check: {}", guild.id, e);
    }
}
