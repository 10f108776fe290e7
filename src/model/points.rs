//! Point balances and accrual events.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serenity::all::{GuildId, UserId};

use crate::util::parse::parse_snowflake;

/// A user's point balance within one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct PointBalance {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub points: i64,
    /// When points were last awarded; used to enforce the earning cooldown.
    pub last_earned_at: DateTime<Utc>,
}

impl PointBalance {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PointBalance)` - The converted balance
    /// - `Err(DbErr::Custom)` - A stored id is not a valid Discord snowflake
    pub fn from_entity(entity: entity::user_points::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: GuildId::new(parse_snowflake(entity.guild_id)?),
            user_id: UserId::new(parse_snowflake(entity.user_id)?),
            points: entity.points,
            last_earned_at: entity.last_earned_at,
        })
    }
}

/// A guild message that may earn its author points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointEvent {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub at: DateTime<Utc>,
}
