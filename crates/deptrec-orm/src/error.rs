//! Error types for the mapping layer.

use std::fmt;

/// The row-level statement an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `INSERT`, issued by `save`.
    Insert,
    /// `UPDATE`, issued by `update`.
    Update,
    /// `DELETE`, issued by `delete`.
    Delete,
}

impl Operation {
    /// Returns the SQL keyword for this operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while mapping records to rows.
#[derive(Debug, thiserror::Error)]
pub enum OrmError {
    /// A `CREATE TABLE` or `DROP TABLE` statement failed.
    #[error("schema change on '{table}' failed: {source}")]
    Schema {
        /// The table being created or dropped.
        table: &'static str,
        /// The underlying SQLite error.
        source: rusqlite::Error,
    },

    /// An insert, update, or delete statement failed.
    #[error("{op} on '{table}' failed: {source}")]
    Persistence {
        /// The statement that failed.
        op: Operation,
        /// The table being written.
        table: &'static str,
        /// The underlying SQLite error.
        source: rusqlite::Error,
    },

    /// `update` or `delete` was called on a record that was never saved.
    #[error("{op} on '{table}' requires a saved record, but its id is unset")]
    Precondition {
        /// The statement that was refused.
        op: Operation,
        /// The table the record maps to.
        table: &'static str,
    },
}
