//! Point balance factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a point balance for a user in a guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the points belong to
/// - `user_id` - User holding the points
/// - `points` - Starting balance
/// - `last_earned_at` - When points were last awarded
///
/// # Returns
/// - `Ok(entity::user_points::Model)` - Created record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_points(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    points: i64,
    last_earned_at: DateTime<Utc>,
) -> Result<entity::user_points::Model, DbErr> {
    entity::user_points::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        user_id: ActiveValue::Set(user_id),
        points: ActiveValue::Set(points),
        last_earned_at: ActiveValue::Set(last_earned_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
