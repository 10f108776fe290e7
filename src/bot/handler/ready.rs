//! Ready event handler.
//!
//! Fired once per gateway connection after the initial handshake. Sets the bot's presence
//! to advertise the help command and logs how many guilds the session covers.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user and guild list
/// - `prefix` - Command prefix shown in the activity
pub async fn handle_ready(ctx: Context, ready: Ready, prefix: &str) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::playing(format!("{}help", prefix))));
}
