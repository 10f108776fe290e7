//! Wires every command to its preconditions.
//!
//! Precondition order per module:
//! - General and Fun: enablement gate, then ratelimit, so disabled commands cost no budget
//! - Admin: guild only, then Administrator permission
//! - Owner: bot owners only
//!
//! `points` additionally requires a guild since balances are per guild.

use std::sync::Arc;

use crate::{
    command::{
        admin::{Modules, ToggleModule},
        dispatch::CommandDispatcher,
        fun::{Dog, Number},
        general::{Help, Ping, Points},
        owner::{GuildBan, GuildUnban},
        precondition::{
            Precondition, Ratelimit, RequireAdmin, RequireEnabled, RequireGuild, RequireOwner,
        },
        Command,
    },
    error::AppError,
    model::module::Module,
    service::module::GuildModuleRegistry,
    state::AppState,
};

pub fn build_dispatcher(state: &AppState) -> Result<CommandDispatcher, AppError> {
    let require_enabled: Arc<dyn Precondition> = Arc::new(RequireEnabled::new(Arc::new(
        GuildModuleRegistry::new(state.root_db.clone()),
    )));
    let ratelimit: Arc<dyn Precondition> = Arc::new(Ratelimit::new(state.ratelimit.clone()));
    let require_guild: Arc<dyn Precondition> = Arc::new(RequireGuild);
    let require_admin: Arc<dyn Precondition> = Arc::new(RequireAdmin);
    let require_owner: Arc<dyn Precondition> = Arc::new(RequireOwner::new(state.owner_ids.clone()));

    let commands: Vec<Arc<dyn Command>> = vec![
        Arc::new(Ping),
        Arc::new(Points::new(state.points_db.clone())),
        Arc::new(Dog::new(state.dog_api.clone())),
        Arc::new(Number::new(state.numbers_api.clone())),
        Arc::new(Modules::new(state.root_db.clone())),
        Arc::new(ToggleModule::enable(state.root_db.clone())),
        Arc::new(ToggleModule::disable(state.root_db.clone())),
        Arc::new(GuildBan::new(state.root_db.clone(), state.bans.clone())),
        Arc::new(GuildUnban::new(state.root_db.clone())),
    ];
    let help: Arc<dyn Command> = Arc::new(Help::new(&state.prefix, &commands));

    let mut builder = CommandDispatcher::builder(state.prefix.clone(), state.shutdown.clone());

    for command in std::iter::once(help).chain(commands) {
        let preconditions = match command.module() {
            Module::General | Module::Fun => {
                let mut list = Vec::new();
                if command.name() == "points" {
                    list.push(require_guild.clone());
                }
                list.push(require_enabled.clone());
                list.push(ratelimit.clone());
                list
            }
            Module::Admin => vec![require_guild.clone(), require_admin.clone()],
            Module::Owner => vec![require_owner.clone()],
        };

        builder = builder.register(command, preconditions);
    }

    builder.build()
}
