use crate::{
    command::precondition::ModuleRegistry,
    error::{command::CommandError, AppError},
    model::module::Module,
    service::module::{GuildModuleRegistry, ModuleService},
};
use serenity::all::GuildId;
use test_utils::{builder::TestBuilder, factory};

mod list;
mod registry;
mod set_disabled;
