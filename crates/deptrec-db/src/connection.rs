//! Connection handle creation and statement execution.

use rusqlite::{params, Connection, OpenFlags, Params};
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Runtime tunables for the SQLite connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbRuntimeSettings {
    /// Busy timeout for the connection, in milliseconds.
    pub busy_timeout_ms: u64,
}

impl Default for DbRuntimeSettings {
    fn default() -> Self {
        Self {
            busy_timeout_ms: 5_000,
        }
    }
}

/// Errors that can occur when opening or closing a [`Database`].
#[derive(Debug, Error)]
pub enum DbError {
    /// The database file could not be opened or created.
    #[error("failed to open database at '{path}': {source}")]
    Open {
        /// The path that was being opened.
        path: String,
        /// The underlying SQLite error.
        source: rusqlite::Error,
    },

    /// Connection pragmas could not be applied.
    #[error("failed to apply connection settings: {0}")]
    Settings(rusqlite::Error),

    /// The connection could not be closed cleanly.
    #[error("failed to close database: {0}")]
    Close(rusqlite::Error),
}

/// Outcome of a single executed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Executed {
    /// Number of rows inserted, updated, or deleted by the statement.
    pub rows_affected: usize,
    /// Row id of the most recent successful insert on this connection.
    pub last_insert_id: i64,
}

/// The persistence context: one SQLite connection shared by every operation.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (creating if necessary) the SQLite database file at `path`.
    ///
    /// Enables foreign key enforcement and sets the busy timeout from
    /// `settings`.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Open` if the file cannot be opened and
    /// `DbError::Settings` if the connection pragmas are rejected.
    pub fn open(path: &str, settings: DbRuntimeSettings) -> Result<Self, DbError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(path, flags).map_err(|e| DbError::Open {
            path: path.to_string(),
            source: e,
        })?;

        let db = Self::with_settings(conn, settings)?;
        tracing::info!(
            path,
            busy_timeout_ms = settings.busy_timeout_ms,
            "opened database"
        );
        Ok(db)
    }

    /// Opens a private in-memory database with default settings.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory().map_err(|e| DbError::Open {
            path: ":memory:".to_string(),
            source: e,
        })?;
        Self::with_settings(conn, DbRuntimeSettings::default())
    }

    /// Opens the database described by a loaded [`DatabaseConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`Database::open`].
    pub fn from_config(config: &DatabaseConfig) -> Result<Self, DbError> {
        Self::open(
            &config.path,
            DbRuntimeSettings {
                busy_timeout_ms: config.busy_timeout_ms,
            },
        )
    }

    fn with_settings(conn: Connection, settings: DbRuntimeSettings) -> Result<Self, DbError> {
        conn.execute_batch(&format!(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = {};",
            settings.busy_timeout_ms
        ))
        .map_err(DbError::Settings)?;
        Ok(Self { conn })
    }

    /// Executes one statement with bound parameters.
    ///
    /// The statement runs in auto-commit mode, so it is durable once this
    /// returns `Ok`. Parameter values are never spliced into `sql`.
    ///
    /// # Errors
    ///
    /// Returns the driver error unchanged; nothing is retried.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<Executed, rusqlite::Error> {
        let rows_affected = self.conn.execute(sql, params)?;
        Ok(Executed {
            rows_affected,
            last_insert_id: self.conn.last_insert_rowid(),
        })
    }

    /// Executes one or more parameterless statements, such as DDL.
    ///
    /// # Errors
    ///
    /// Returns the driver error unchanged.
    pub fn execute_batch(&self, sql: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(sql)
    }

    /// Returns the underlying connection for ad hoc reads.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Returns `true` if a table named `table` exists in the main schema.
    ///
    /// # Errors
    ///
    /// Returns the driver error if `sqlite_master` cannot be queried.
    pub fn table_exists(&self, table: &str) -> Result<bool, rusqlite::Error> {
        self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
            params![table],
            |row| row.get(0),
        )
    }

    /// Returns `(name, declared_type, is_primary_key)` for each column of
    /// `table`, in declaration order. Empty if the table does not exist.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the table info cannot be read.
    pub fn table_columns(
        &self,
        table: &str,
    ) -> Result<Vec<(String, String, bool)>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, type, pk FROM pragma_table_info(?1) ORDER BY cid")?;
        let rows = stmt.query_map(params![table], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get::<_, i64>(2)? > 0))
        })?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row?);
        }
        Ok(columns)
    }

    /// Closes the connection, surfacing any error SQLite reports.
    ///
    /// Dropping a `Database` also closes it, but silently.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Close` if SQLite refuses to close the connection.
    pub fn close(self) -> Result<(), DbError> {
        self.conn.close().map_err(|(_, e)| DbError::Close(e))?;
        tracing::debug!("closed database");
        Ok(())
    }
}
