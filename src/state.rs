//! Shared resources the commands are built from.
//!
//! `AppState` is assembled once during startup and consumed by the command registry. Every
//! field is cheap to clone:
//! - `DatabaseConnection` is a connection pool
//! - API services wrap a `reqwest::Client`, which is reference-counted
//! - `RatelimitService` and `Shutdown` share their state through `Arc`
//! - `mpsc::Sender` clones share one channel

use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, UserId};
use std::collections::HashSet;
use tokio::sync::mpsc;

use crate::{
    service::{
        api::{dog::DogApiService, numbers::NumbersApiService},
        ratelimit::RatelimitService,
    },
    shutdown::Shutdown,
};

#[derive(Clone)]
pub struct AppState {
    /// Command prefix, e.g. `d!`.
    pub prefix: String,

    /// Module settings and guild bans.
    pub root_db: DatabaseConnection,

    /// User point balances.
    pub points_db: DatabaseConnection,

    pub dog_api: DogApiService,
    pub numbers_api: NumbersApiService,

    /// Command budget shared by every ratelimited command.
    pub ratelimit: RatelimitService,

    pub owner_ids: HashSet<UserId>,

    /// Queue of the guild ban service.
    pub bans: mpsc::Sender<GuildId>,

    pub shutdown: Shutdown,
}
