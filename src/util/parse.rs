use sea_orm::DbErr;
use serenity::all::GuildId;

use crate::error::command::CommandError;

/// Converts a stored signed id back into a non-zero Discord snowflake.
///
/// Snowflakes are stored as `i64` because SQLite has no unsigned 64-bit integer type.
///
/// # Returns
/// - `Ok(u64)` - The snowflake
/// - `Err(DbErr::Custom)` - The stored value is zero or negative
pub fn parse_snowflake(value: i64) -> Result<u64, DbErr> {
    u64::try_from(value)
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| DbErr::Custom(format!("Invalid stored snowflake: {}", value)))
}

/// Parses a guild id typed by a user.
///
/// # Returns
/// - `Ok(GuildId)` - Parsed id
/// - `Err(CommandError::InvalidNumber)` - Not a positive integer
pub fn parse_guild_id(value: &str) -> Result<GuildId, CommandError> {
    value
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(GuildId::new)
        .ok_or_else(|| CommandError::InvalidNumber(value.to_string()))
}
