//! Parses chat messages into command invocations and runs them.
//!
//! For every message carrying the configured prefix the dispatcher resolves the command by
//! name or alias, evaluates its preconditions in order, and runs the body only if every
//! precondition allowed it. Evaluation is raced against the shutdown signal.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    command::{
        context::{IncomingMessage, InvocationContext},
        precondition::{Precondition, PreconditionResult},
        Command,
    },
    error::AppError,
    shutdown::Shutdown,
};

/// What happened to a single message.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The message does not carry the prefix, or carries nothing after it.
    NotCommand,
    /// The prefix is present but no command has the given name.
    UnknownCommand(String),
    /// A precondition denied the invocation; an empty reason means deny silently.
    Denied {
        command: &'static str,
        precondition: &'static str,
        reason: String,
    },
    /// The body ran and produced a reply, possibly empty.
    Executed { command: &'static str, reply: String },
    /// A precondition or the body returned an error.
    Failed {
        command: &'static str,
        error: AppError,
    },
    /// Shutdown was signalled before preconditions finished.
    Cancelled { command: &'static str },
}

impl DispatchOutcome {
    /// The message to send back to the channel, if any.
    pub fn reply(&self) -> Option<String> {
        let text = match self {
            Self::Denied { reason, .. } => reason.clone(),
            Self::Executed { reply, .. } => reply.clone(),
            Self::Failed { error, .. } => error.user_message()?,
            Self::NotCommand | Self::UnknownCommand(_) | Self::Cancelled { .. } => return None,
        };

        if text.is_empty() {
            return None;
        }

        Some(text)
    }
}

/// Result of evaluating a precondition list.
#[derive(Debug, PartialEq, Eq)]
pub enum Evaluation {
    Allowed,
    Denied {
        precondition: &'static str,
        reason: String,
    },
}

struct CommandEntry {
    command: Arc<dyn Command>,
    preconditions: Vec<Arc<dyn Precondition>>,
}

pub struct CommandDispatcher {
    prefix: String,
    entries: Vec<CommandEntry>,
    /// Lowercase name or alias to index in `entries`.
    lookup: HashMap<String, usize>,
    shutdown: Shutdown,
}

impl CommandDispatcher {
    pub fn builder(prefix: impl Into<String>, shutdown: Shutdown) -> CommandDispatcherBuilder {
        CommandDispatcherBuilder {
            prefix: prefix.into(),
            entries: Vec::new(),
            shutdown,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.entries.iter().map(|entry| &entry.command)
    }

    /// Splits a message into a lowercase command name and its arguments.
    ///
    /// Returns `None` if the message lacks the prefix or has no name after it.
    pub fn parse(&self, content: &str) -> Option<(String, Vec<String>)> {
        let rest = content.trim_start().strip_prefix(self.prefix.as_str())?;

        // The name must directly follow the prefix.
        if rest.starts_with(char::is_whitespace) {
            return None;
        }

        let mut parts = rest.split_whitespace();
        let name = parts.next()?.to_lowercase();
        let args = parts.map(str::to_string).collect();

        Some((name, args))
    }

    /// Cheap check used to skip non-command messages before building an invocation.
    pub fn is_command(&self, content: &str) -> bool {
        self.parse(content).is_some()
    }

    pub async fn dispatch(&self, message: IncomingMessage) -> DispatchOutcome {
        let Some((name, args)) = self.parse(&message.content) else {
            return DispatchOutcome::NotCommand;
        };

        let Some(entry) = self.lookup.get(&name).map(|&index| &self.entries[index]) else {
            tracing::debug!("Unknown command {} from user {}", name, message.author_id);
            return DispatchOutcome::UnknownCommand(name);
        };

        let command = entry.command.name();
        let ctx = InvocationContext {
            guild_id: message.guild_id,
            channel_id: message.channel_id,
            author_id: message.author_id,
            author_is_admin: message.author_is_admin,
            module: entry.command.module(),
            command,
            args,
        };

        let evaluation = tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => {
                tracing::debug!("Invocation of {} cancelled by shutdown", command);
                return DispatchOutcome::Cancelled { command };
            }
            evaluation = evaluate(&entry.preconditions, &ctx) => evaluation,
        };

        match evaluation {
            Ok(Evaluation::Allowed) => {}
            Ok(Evaluation::Denied {
                precondition,
                reason,
            }) => {
                tracing::debug!(
                    "Command {} denied by {} for user {} in {:?}",
                    command,
                    precondition,
                    ctx.author_id,
                    ctx.guild_id
                );
                return DispatchOutcome::Denied {
                    command,
                    precondition,
                    reason,
                };
            }
            Err(error) => return DispatchOutcome::Failed { command, error },
        }

        match entry.command.run(&ctx).await {
            Ok(reply) => DispatchOutcome::Executed { command, reply },
            Err(error) => DispatchOutcome::Failed { command, error },
        }
    }
}

/// Evaluates preconditions in order, stopping at the first denial or error.
///
/// Preconditions after the stopping point are never invoked.
pub async fn evaluate(
    preconditions: &[Arc<dyn Precondition>],
    ctx: &InvocationContext,
) -> Result<Evaluation, AppError> {
    for precondition in preconditions {
        match precondition.check(ctx).await? {
            PreconditionResult::Allowed => continue,
            PreconditionResult::Denied(reason) => {
                return Ok(Evaluation::Denied {
                    precondition: precondition.name(),
                    reason,
                })
            }
        }
    }

    Ok(Evaluation::Allowed)
}

pub struct CommandDispatcherBuilder {
    prefix: String,
    entries: Vec<CommandEntry>,
    shutdown: Shutdown,
}

impl CommandDispatcherBuilder {
    /// Adds a command guarded by `preconditions`, evaluated in the given order.
    pub fn register(
        mut self,
        command: Arc<dyn Command>,
        preconditions: Vec<Arc<dyn Precondition>>,
    ) -> Self {
        self.entries.push(CommandEntry {
            command,
            preconditions,
        });
        self
    }

    /// Builds the dispatcher.
    ///
    /// # Returns
    /// - `Ok(CommandDispatcher)` - Every name and alias is unique
    /// - `Err(AppError::InternalError)` - Two commands share a name or alias
    pub fn build(self) -> Result<CommandDispatcher, AppError> {
        let mut lookup = HashMap::new();

        for (index, entry) in self.entries.iter().enumerate() {
            let names = std::iter::once(entry.command.name())
                .chain(entry.command.aliases().iter().copied());

            for name in names {
                if lookup.insert(name.to_lowercase(), index).is_some() {
                    return Err(AppError::InternalError(format!(
                        "Command name or alias {} is registered twice",
                        name
                    )));
                }
            }
        }

        Ok(CommandDispatcher {
            prefix: self.prefix,
            entries: self.entries,
            lookup,
            shutdown: self.shutdown,
        })
    }
}
