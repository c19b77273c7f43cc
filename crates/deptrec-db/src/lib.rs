//! Database access layer for deptrec.
//!
//! Owns the single SQLite connection every mapped entity writes through,
//! plus the configuration and logging setup that surround it.
//!
//! # Design decisions
//!
//! - **One connection, no pool**: a [`Database`] wraps exactly one
//!   `rusqlite::Connection` for its whole lifetime. Callers pass the handle
//!   explicitly instead of reaching for a process-wide global, so each test
//!   can run against its own in-memory database.
//! - **Auto-commit per statement**: SQLite commits every statement executed
//!   outside an explicit transaction, so [`Database::execute`] is both the
//!   execute and the commit step.
//! - **No locking of our own**: concurrent writers against the same file are
//!   serialized only by SQLite. A writer that cannot get the lock within the
//!   busy timeout fails with `SQLITE_BUSY` ("database is locked"), which is
//!   returned to the caller and never retried here.

mod config;
mod connection;
mod logging;

pub use config::{load_config, Config, ConfigError, DatabaseConfig, LoggingConfig};
pub use connection::{Database, DbError, DbRuntimeSettings, Executed};
pub use logging::init_tracing;
