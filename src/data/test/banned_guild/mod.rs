use crate::data::banned_guild::BannedGuildRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serenity::all::GuildId;
use test_utils::{builder::TestBuilder, factory};

mod ban;
mod is_banned;
mod unban;
