//! Startup helpers run once by `main` before the bot connects.

use migration::{MigratorTrait, PointsMigrator, RootMigrator};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,dogey=debug";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to `info` for dependencies and `debug`
/// for the bot itself.
pub fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the root database and runs pending migrations.
///
/// The root database stores module settings and guild bans.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_root_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = connect(&config.root_database_url).await?;

    RootMigrator::up(&db, None).await?;

    Ok(db)
}

/// Connects to the points database and runs pending migrations.
pub async fn connect_to_points_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = connect(&config.points_database_url).await?;

    PointsMigrator::up(&db, None).await?;

    Ok(db)
}

async fn connect(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

/// Builds the HTTP client shared by the API services.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("dogey/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Waits for Ctrl-C.
pub async fn wait_for_shutdown_signal() -> Result<(), AppError> {
    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutdown signal received");

    Ok(())
}
