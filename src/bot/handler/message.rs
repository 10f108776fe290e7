use serenity::all::{Context, Message};
use tokio::sync::mpsc;

use crate::{
    command::{
        context::IncomingMessage,
        dispatch::{CommandDispatcher, DispatchOutcome},
    },
    model::points::PointEvent,
};

/// Handle message creation in a channel
///
/// Guild messages from users earn points. Messages carrying the command prefix are then
/// dispatched and the outcome, if it has a reply, is sent to the same channel.
pub async fn handle_message(
    dispatcher: &CommandDispatcher,
    points: &mpsc::Sender<PointEvent>,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    if let Some(guild_id) = message.guild_id {
        let event = PointEvent {
            guild_id,
            user_id: message.author.id,
            at: message.timestamp.to_utc(),
        };

        // Never block the gateway on a full queue
        if let Err(e) = points.try_send(event) {
            tracing::warn!("Dropped point event: {}", e);
        }
    }

    if !dispatcher.is_command(&message.content) {
        return;
    }

    let incoming = IncomingMessage {
        guild_id: message.guild_id,
        channel_id: message.channel_id,
        author_id: message.author.id,
        author_is_admin: author_is_admin(&ctx, &message),
        content: message.content.clone(),
    };

    let outcome = dispatcher.dispatch(incoming).await;
    log_outcome(&outcome, &message);

    let Some(reply) = outcome.reply() else {
        return;
    };

    if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
        tracing::error!(
            "Failed to send reply in channel {}: {}",
            message.channel_id,
            e
        );
    }
}

/// Whether the author holds the Administrator permission, from the gateway cache.
///
/// Direct messages and uncached guilds count as no permission.
fn author_is_admin(ctx: &Context, message: &Message) -> bool {
    let Some(guild_id) = message.guild_id else {
        return false;
    };
    let Some(guild) = ctx.cache.guild(guild_id) else {
        return false;
    };

    let permissions = match (&message.member, guild.members.get(&message.author.id)) {
        (Some(partial), _) => guild.partial_member_permissions(message.author.id, partial),
        (None, Some(member)) => guild.member_permissions(member),
        (None, None) => return guild.owner_id == message.author.id,
    };

    permissions.administrator()
}

fn log_outcome(outcome: &DispatchOutcome, message: &Message) {
    match outcome {
        DispatchOutcome::Executed { command, .. } => tracing::debug!(
            "Executed {} for user {} in {:?}",
            command,
            message.author.id,
            message.guild_id
        ),
        DispatchOutcome::Failed { command, error } => tracing::error!(
            "Command {} failed for user {} in {:?}: {}",
            command,
            message.author.id,
            message.guild_id,
            error
        ),
        DispatchOutcome::Cancelled { command } => {
            tracing::debug!("Command {} cancelled by shutdown", command)
        }
        DispatchOutcome::NotCommand
        | DispatchOutcome::UnknownCommand(_)
        | DispatchOutcome::Denied { .. } => {}
    }
}
