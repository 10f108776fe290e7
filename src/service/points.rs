//! Point balances and the background service that awards them.

use chrono::Duration;
use rand::Rng;
use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, UserId};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    data::user_points::UserPointsRepository,
    error::AppError,
    model::points::{PointBalance, PointEvent},
    shutdown::Shutdown,
};

/// Smallest and largest number of points a single message can earn.
const MIN_AWARD: i64 = 1;
const MAX_AWARD: i64 = 3;

pub struct PointService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PointService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's points in a guild, zero if they never earned any.
    pub async fn get_points(&self, guild_id: GuildId, user_id: UserId) -> Result<i64, AppError> {
        let balance = UserPointsRepository::new(self.db)
            .find(guild_id, user_id)
            .await?;

        Ok(balance.map_or(0, |b| b.points))
    }
}

/// Awards points for guild messages received from the gateway.
///
/// Messages arrive over an mpsc channel so the event handler never waits on the database.
/// Each user can earn points at most once per cooldown in each guild.
pub struct PointEarningService {
    db: DatabaseConnection,
    cooldown: Duration,
}

impl PointEarningService {
    pub fn new(db: DatabaseConnection, cooldown: Duration) -> Self {
        Self { db, cooldown }
    }

    /// Spawns the service loop.
    ///
    /// The loop exits once shutdown is triggered or every sender has been dropped.
    pub fn start(self, mut events: mpsc::Receiver<PointEvent>, shutdown: Shutdown) -> JoinHandle<()> {
        tokio::spawn(async move {
            tracing::info!("Point earning service started");

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    event = events.recv() => {
                        let Some(event) = event else { break };

                        if let Err(e) = self.process(event, roll_award()).await {
                            tracing::error!("Failed to award points: {}", e);
                        }
                    }
                }
            }

            tracing::info!("Point earning service stopped");
        })
    }

    /// Awards `amount` points for a single message.
    ///
    /// # Returns
    /// - `Ok(Some(PointBalance))` - Points were awarded, the new balance
    /// - `Ok(None)` - The author is still cooling down
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn process(
        &self,
        event: PointEvent,
        amount: i64,
    ) -> Result<Option<PointBalance>, AppError> {
        let balance = UserPointsRepository::new(&self.db)
            .award(event.guild_id, event.user_id, amount, event.at, self.cooldown)
            .await?;

        if let Some(balance) = &balance {
            tracing::debug!(
                "Awarded {} points to user {} in guild {} (total {})",
                amount,
                balance.user_id,
                balance.guild_id,
                balance.points
            );
        }

        Ok(balance)
    }
}

fn roll_award() -> i64 {
    rand::rng().random_range(MIN_AWARD..=MAX_AWARD)
}
