use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use serenity::all::{GuildId, UserId};

use crate::model::points::PointBalance;

/// Per-guild point balances.
pub struct UserPointsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserPointsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<PointBalance>, DbErr> {
        self.find_entity(guild_id, user_id)
            .await?
            .map(PointBalance::from_entity)
            .transpose()
    }

    async fn find_entity(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<entity::user_points::Model>, DbErr> {
        entity::prelude::UserPoints::find()
            .filter(entity::user_points::Column::GuildId.eq(guild_id.get() as i64))
            .filter(entity::user_points::Column::UserId.eq(user_id.get() as i64))
            .one(self.db)
            .await
    }

    /// Awards points unless the user already earned points within the cooldown
    ///
    /// The first award for a user in a guild creates their balance.
    ///
    /// # Arguments
    /// - `amount`: Points to add
    /// - `now`: Time of the message that earned the points
    /// - `cooldown`: Minimum time since the last award
    ///
    /// # Returns
    /// - `Ok(Some(PointBalance))`: Points were awarded, the new balance
    /// - `Ok(None)`: Still cooling down, nothing changed
    /// - `Err(DbErr)`: Database error
    pub async fn award(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        amount: i64,
        now: DateTime<Utc>,
        cooldown: Duration,
    ) -> Result<Option<PointBalance>, DbErr> {
        let model = match self.find_entity(guild_id, user_id).await? {
            Some(existing) => {
                if now - existing.last_earned_at < cooldown {
                    return Ok(None);
                }

                let points = existing.points + amount;
                let mut active: entity::user_points::ActiveModel = existing.into();
                active.points = ActiveValue::Set(points);
                active.last_earned_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::user_points::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.get() as i64),
                    user_id: ActiveValue::Set(user_id.get() as i64),
                    points: ActiveValue::Set(amount),
                    last_earned_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        PointBalance::from_entity(model).map(Some)
    }
}
