//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps infrastructure failures (database,
//! gateway, HTTP, scheduler) and domain-specific errors. Command bodies and preconditions
//! return `AppError` so the dispatcher can decide what, if anything, the invoking user sees.

pub mod command;
pub mod config;

use thiserror::Error;

use crate::error::{command::CommandError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants use
/// `#[from]` for automatic error conversion so `?` works across layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Always fatal; the bot cannot start without valid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// User-facing command error such as a missing or invalid argument.
    ///
    /// The dispatcher replies with the error message instead of only logging it.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Occurs when an external API call fails or returns an unexpected body.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error, e.g. while waiting for the Ctrl-C signal.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal error with custom message.
    ///
    /// Logged but never shown to users.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the message that may be shown to the invoking user, if any.
    ///
    /// Only command errors are user-facing. Infrastructure failures return `None` so their
    /// details stay in the logs.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::CommandErr(err) => Some(err.to_string()),
            _ => None,
        }
    }
}
