use crate::data::guild_module::GuildModuleRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serenity::all::GuildId;
use test_utils::{builder::TestBuilder, factory};

mod get_disabled_modules;
mod is_module_disabled;
mod set_module_disabled;
