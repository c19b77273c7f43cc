//! Table creation and removal for mapped types.

use deptrec_db::Database;

use crate::error::OrmError;
use crate::record::{create_table_sql, drop_table_sql, Record};

/// Creates the table for `R` if it does not exist yet.
///
/// Idempotent: an existing table is left untouched, including its rows.
///
/// # Errors
///
/// Returns `OrmError::Schema` if the statement fails.
pub fn create_table<R: Record>(db: &Database) -> Result<(), OrmError> {
    let sql = create_table_sql::<R>();
    db.execute_batch(&sql).map_err(|e| OrmError::Schema {
        table: R::TABLE,
        source: e,
    })?;
    tracing::info!(table = R::TABLE, "ensured table exists");
    Ok(())
}

/// Drops the table for `R` if it exists, along with all of its rows.
///
/// # Errors
///
/// Returns `OrmError::Schema` if the statement fails.
pub fn drop_table<R: Record>(db: &Database) -> Result<(), OrmError> {
    let sql = drop_table_sql::<R>();
    db.execute_batch(&sql).map_err(|e| OrmError::Schema {
        table: R::TABLE,
        source: e,
    })?;
    tracing::info!(table = R::TABLE, "dropped table if present");
    Ok(())
}
