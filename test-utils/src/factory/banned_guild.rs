//! Banned guild factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a banned guild record with no reason.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild to ban
///
/// # Returns
/// - `Ok(entity::banned_guild::Model)` - Created record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_banned_guild(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::banned_guild::Model, DbErr> {
    entity::banned_guild::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        reason: ActiveValue::Set(None),
        banned_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
