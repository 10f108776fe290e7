mod bot;
mod command;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod shutdown;
mod startup;
mod state;
mod util;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::{
    bot::handler::Handler,
    command::registry::build_dispatcher,
    config::Config,
    error::AppError,
    scheduler::ratelimit_sweep,
    service::{
        api::{dog::DogApiService, numbers::NumbersApiService},
        guild_ban::GuildBanService,
        points::PointEarningService,
        ratelimit::RatelimitService,
    },
    shutdown::Shutdown,
    state::AppState,
};

/// Capacity of the queues feeding the background services.
const SERVICE_QUEUE_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::setup_logging();

    let config = Config::from_env()?;

    let root_db = startup::connect_to_root_database(&config).await?;
    let points_db = startup::connect_to_points_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let shutdown = Shutdown::new();
    let ratelimit = RatelimitService::new(config.ratelimit_max_uses, config.ratelimit_window);
    let (ban_tx, ban_rx) = mpsc::channel(SERVICE_QUEUE_CAPACITY);
    let (points_tx, points_rx) = mpsc::channel(SERVICE_QUEUE_CAPACITY);

    let state = AppState {
        prefix: config.prefix.clone(),
        root_db: root_db.clone(),
        points_db: points_db.clone(),
        dog_api: DogApiService::new(http_client.clone(), config.dog_api_url.clone()),
        numbers_api: NumbersApiService::new(http_client, config.numbers_api_url.clone()),
        ratelimit: ratelimit.clone(),
        owner_ids: config.owner_ids.clone(),
        bans: ban_tx.clone(),
        shutdown: shutdown.clone(),
    };

    let dispatcher = Arc::new(build_dispatcher(&state)?);
    tracing::info!(
        "Registered {} commands with prefix {}",
        dispatcher.commands().count(),
        dispatcher.prefix()
    );

    let handler = Handler::new(dispatcher, points_tx, ban_tx);
    let (bot_client, discord_http) = bot::start::init_bot(&config, handler).await?;
    let shard_manager = bot_client.shard_manager.clone();

    let ban_service = GuildBanService::new(root_db, discord_http).start(ban_rx, shutdown.clone());
    let points_service = PointEarningService::new(points_db, config.points_cooldown)
        .start(points_rx, shutdown.clone());

    let scheduler_ratelimit = ratelimit.clone();
    let scheduler_shutdown = shutdown.clone();
    let scheduler = tokio::spawn(async move {
        if let Err(e) =
            ratelimit_sweep::start_scheduler(scheduler_ratelimit, scheduler_shutdown).await
        {
            tracing::error!("Ratelimit sweep scheduler error: {}", e);
        }
    });

    let mut bot = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // Either a signal or the gateway client exiting on its own takes the whole process down.
    let bot_stopped = tokio::select! {
        signal = startup::wait_for_shutdown_signal() => {
            if let Err(e) = signal {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            false
        }
        joined = &mut bot => {
            if let Err(e) = joined {
                tracing::error!("Failed to join bot: {}", e);
            }
            tracing::warn!("Discord bot stopped, shutting down");
            true
        }
    };

    shutdown.trigger();
    shard_manager.shutdown_all().await;

    let mut tasks = vec![
        ("guild ban service", ban_service),
        ("point earning service", points_service),
        ("ratelimit scheduler", scheduler),
    ];
    if !bot_stopped {
        tasks.push(("bot", bot));
    }

    for (name, task) in tasks {
        if let Err(e) = task.await {
            tracing::error!("Failed to join {}: {}", name, e);
        }
    }

    tracing::info!("Shut down cleanly");

    Ok(())
}
