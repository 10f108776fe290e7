use crate::data::user_points::UserPointsRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use serenity::all::{GuildId, UserId};
use test_utils::{builder::TestBuilder, factory};

mod award;
mod find;
