use serde::Deserialize;
use serenity::all::UserId;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_CONFIG_PATH: &str = "_configuration.json";
const DEFAULT_PREFIX: &str = "d!";
const DEFAULT_ROOT_DATABASE_URL: &str = "sqlite://dogey.sqlite?mode=rwc";
const DEFAULT_POINTS_DATABASE_URL: &str = "sqlite://points.sqlite?mode=rwc";
const DEFAULT_DOG_API_URL: &str = "https://dog.ceo/api";
const DEFAULT_NUMBERS_API_URL: &str = "http://numbersapi.com";

#[derive(Deserialize)]
struct ConfigFile {
    tokens: TokensFile,
    #[serde(default = "default_prefix")]
    prefix: String,
    #[serde(default)]
    owner_ids: Vec<u64>,
    #[serde(default)]
    database: DatabaseFile,
    #[serde(default)]
    ratelimit: RatelimitFile,
    #[serde(default)]
    points: PointsFile,
    #[serde(default)]
    api: ApiFile,
}

#[derive(Deserialize)]
struct TokensFile {
    #[serde(default)]
    discord: String,
}

#[derive(Deserialize, Default)]
struct DatabaseFile {
    root: Option<String>,
    points: Option<String>,
}

#[derive(Deserialize)]
struct RatelimitFile {
    #[serde(default = "default_max_uses")]
    max_uses: u32,
    #[serde(default = "default_window_seconds")]
    window_seconds: u64,
}

impl Default for RatelimitFile {
    fn default() -> Self {
        Self {
            max_uses: default_max_uses(),
            window_seconds: default_window_seconds(),
        }
    }
}

#[derive(Deserialize)]
struct PointsFile {
    #[serde(default = "default_cooldown_seconds")]
    cooldown_seconds: u32,
}

impl Default for PointsFile {
    fn default() -> Self {
        Self {
            cooldown_seconds: default_cooldown_seconds(),
        }
    }
}

#[derive(Deserialize, Default)]
struct ApiFile {
    dog_url: Option<String>,
    numbers_url: Option<String>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_max_uses() -> u32 {
    5
}

fn default_window_seconds() -> u64 {
    10
}

fn default_cooldown_seconds() -> u32 {
    60
}

/// Process configuration, loaded once at startup and read-only afterwards.
pub struct Config {
    pub discord_token: String,
    /// Prefix that marks a message as a command, e.g. `d!`.
    pub prefix: String,
    /// Users allowed to run owner-only commands.
    pub owner_ids: HashSet<UserId>,

    pub root_database_url: String,
    pub points_database_url: String,

    /// Maximum command invocations per user within `ratelimit_window`.
    pub ratelimit_max_uses: u32,
    pub ratelimit_window: Duration,

    /// Minimum time between two point awards for the same user in the same guild.
    pub points_cooldown: chrono::Duration,

    pub dog_api_url: String,
    pub numbers_api_url: String,
}

impl Config {
    /// Loads configuration from the path in `DOGEY_CONFIG` (or `_configuration.json`) and
    /// applies database URL overrides from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let path = std::env::var("DOGEY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load(path)?;

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.root_database_url = url;
        }
        if let Ok(url) = std::env::var("POINTS_DATABASE_URL") {
            config.points_database_url = url;
        }

        Ok(config)
    }

    /// Loads and validates configuration from a JSON file.
    ///
    /// # Arguments
    /// - `path` - Location of the configuration file
    ///
    /// # Returns
    /// - `Ok(Config)` - Validated configuration
    /// - `Err(ConfigError::ReadFile)` - File missing or unreadable
    /// - `Err(ConfigError::ParseJson)` - File is not valid JSON or has the wrong shape
    /// - `Err(ConfigError::Validation)` - A value is present but unusable
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let file: ConfigFile = serde_json::from_str(&content).map_err(|source| {
            ConfigError::ParseJson {
                path: path.clone(),
                source,
            }
        })?;

        if file.tokens.discord.trim().is_empty() {
            return Err(ConfigError::Validation(
                "tokens.discord is required".to_string(),
            ));
        }
        if file.prefix.is_empty() || file.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "prefix must be non-empty and contain no whitespace".to_string(),
            ));
        }
        if file.ratelimit.max_uses == 0 || file.ratelimit.window_seconds == 0 {
            return Err(ConfigError::Validation(
                "ratelimit.max_uses and ratelimit.window_seconds must be greater than zero"
                    .to_string(),
            ));
        }
        if file.owner_ids.contains(&0) {
            return Err(ConfigError::Validation(
                "owner_ids must not contain 0".to_string(),
            ));
        }

        Ok(Self {
            discord_token: file.tokens.discord,
            prefix: file.prefix,
            owner_ids: file.owner_ids.into_iter().map(UserId::new).collect(),
            root_database_url: file
                .database
                .root
                .unwrap_or_else(|| DEFAULT_ROOT_DATABASE_URL.to_string()),
            points_database_url: file
                .database
                .points
                .unwrap_or_else(|| DEFAULT_POINTS_DATABASE_URL.to_string()),
            ratelimit_max_uses: file.ratelimit.max_uses,
            ratelimit_window: Duration::from_secs(file.ratelimit.window_seconds),
            points_cooldown: chrono::Duration::seconds(i64::from(file.points.cooldown_seconds)),
            dog_api_url: file
                .api
                .dog_url
                .unwrap_or_else(|| DEFAULT_DOG_API_URL.to_string()),
            numbers_api_url: file
                .api
                .numbers_url
                .unwrap_or_else(|| DEFAULT_NUMBERS_API_URL.to_string()),
        })
    }
}
