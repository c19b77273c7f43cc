//! Configuration loading from a TOML file.
//!
//! The file has two tables, both optional:
//!
//! ```toml
//! [database]
//! path = "company.db"      # one SQLite file holds every mapped table
//! busy_timeout_ms = 5000   # wait for a competing writer before failing
//!
//! [logging]
//! level = "deptrec_orm=debug,info"
//! json = false
//! ```
//!
//! Every field has a default, so an empty or missing file yields a working
//! setup: `deptrec.db` in the current directory, a five second busy timeout,
//! and plain-text logs at `info`. Values come from the file only; no
//! environment variables are consulted.

use serde::Deserialize;
use thiserror::Error;

/// Top-level configuration, one field per TOML table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the records live and how a connection behaves under contention.
///
/// Every save, update, and delete commits on its own, so the busy timeout is
/// the only knob that affects writes. When another connection holds the
/// lock for longer than `busy_timeout_ms`, the statement fails with
/// `SQLITE_BUSY` and the error is returned to the caller without a retry.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, created on first open.
    ///
    /// `:memory:` opens a private in-memory database that disappears when
    /// the connection is closed. Defaults to `deptrec.db`.
    #[serde(default = "default_db_path")]
    pub path: String,

    /// How long a blocked statement waits for the lock, in milliseconds.
    /// `0` fails immediately. Defaults to `5000`.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

/// Settings handed to [`crate::init_tracing`].
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `"info"` or
    /// `"deptrec_orm=debug,info"`. An unparseable directive falls back to
    /// `info`. Defaults to `info`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit one JSON object per event instead of plain text.
    #[serde(default)]
    pub json: bool,
}

fn default_db_path() -> String {
    "deptrec.db".to_string()
}

fn default_busy_timeout_ms() -> u64 {
    5_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// A missing file is not an error; every field has a default.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    Ok(config)
}
