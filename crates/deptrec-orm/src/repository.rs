//! Row-level persistence for mapped records.
//!
//! A [`Repository`] binds one record type to a [`Database`] and, optionally,
//! an [`IdentityMap`]. Each method issues exactly one statement with every
//! attribute value bound as a parameter, and the statement commits on its
//! own. A failed statement leaves the in-memory record exactly as it was.

use deptrec_db::Database;
use rusqlite::types::ToSql;

use crate::error::{Operation, OrmError};
use crate::identity_map::IdentityMap;
use crate::record::{delete_sql, insert_sql, update_sql, Record};
use crate::schema;

/// Persistence context for records of type `R`.
#[derive(Debug)]
pub struct Repository<'db, R> {
    db: &'db Database,
    identity_map: Option<IdentityMap<R>>,
}

impl<'db, R: Record> Repository<'db, R> {
    /// Creates a repository that keeps no identity map.
    pub fn new(db: &'db Database) -> Self {
        Self {
            db,
            identity_map: None,
        }
    }

    /// Creates a repository that records every saved row in an
    /// [`IdentityMap`].
    pub fn with_identity_map(db: &'db Database) -> Self {
        Self {
            db,
            identity_map: Some(IdentityMap::new()),
        }
    }

    /// The database this repository writes to.
    pub fn database(&self) -> &'db Database {
        self.db
    }

    /// The identity map, if this repository keeps one.
    pub fn identity_map(&self) -> Option<&IdentityMap<R>> {
        self.identity_map.as_ref()
    }

    /// Creates the table for `R` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Schema` if the statement fails.
    pub fn create_table(&self) -> Result<(), OrmError> {
        schema::create_table::<R>(self.db)
    }

    /// Drops the table for `R` if it exists.
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Schema` if the statement fails.
    pub fn drop_table(&self) -> Result<(), OrmError> {
        schema::drop_table::<R>(self.db)
    }

    /// Inserts `record` as a new row and assigns it the generated key.
    ///
    /// This always inserts. Saving a record that already has an id writes a
    /// second row and moves the record to the new key; the original row is
    /// left behind unchanged. Use [`Repository::update`] to write changes to
    /// an existing row.
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Persistence` if the insert fails, in which case
    /// the record's id is not changed.
    pub fn save(&mut self, record: &mut R) -> Result<i64, OrmError> {
        if let Some(previous) = record.id() {
            tracing::warn!(
                table = R::TABLE,
                id = previous,
                "saving an already-saved record inserts a new row"
            );
        }

        let sql = insert_sql::<R>();
        let executed = self
            .db
            .execute(&sql, record.values().as_slice())
            .map_err(|e| OrmError::Persistence {
                op: Operation::Insert,
                table: R::TABLE,
                source: e,
            })?;

        let id = executed.last_insert_id;
        record.set_id(id);
        if let Some(map) = self.identity_map.as_mut() {
            map.register(id, record);
        }

        tracing::debug!(table = R::TABLE, id, "inserted row");
        Ok(id)
    }

    /// Writes every attribute of `record` to the row with its id.
    ///
    /// Returns the number of rows changed: `1` normally, `0` if the row has
    /// been deleted. The identity map is not refreshed.
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Precondition` if the record has never been saved,
    /// or `OrmError::Persistence` if the update fails.
    pub fn update(&self, record: &R) -> Result<usize, OrmError> {
        let id = record.id().ok_or(OrmError::Precondition {
            op: Operation::Update,
            table: R::TABLE,
        })?;

        let mut values = record.values();
        values.push(&id as &dyn ToSql);

        let sql = update_sql::<R>();
        let executed = self
            .db
            .execute(&sql, values.as_slice())
            .map_err(|e| OrmError::Persistence {
                op: Operation::Update,
                table: R::TABLE,
                source: e,
            })?;

        tracing::debug!(
            table = R::TABLE,
            id,
            rows = executed.rows_affected,
            "updated row"
        );
        Ok(executed.rows_affected)
    }

    /// Deletes the row with `record`'s id and evicts it from the identity map.
    ///
    /// The record itself keeps its fields and its now orphaned id.
    /// Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Precondition` if the record has never been saved,
    /// or `OrmError::Persistence` if the delete fails. On failure the
    /// identity map is left as it was.
    pub fn delete(&mut self, record: &R) -> Result<usize, OrmError> {
        let id = record.id().ok_or(OrmError::Precondition {
            op: Operation::Delete,
            table: R::TABLE,
        })?;

        let sql = delete_sql::<R>();
        let executed = self
            .db
            .execute(&sql, [id])
            .map_err(|e| OrmError::Persistence {
                op: Operation::Delete,
                table: R::TABLE,
                source: e,
            })?;

        if let Some(map) = self.identity_map.as_mut() {
            map.evict(id);
        }

        tracing::debug!(
            table = R::TABLE,
            id,
            rows = executed.rows_affected,
            "deleted row"
        );
        Ok(executed.rows_affected)
    }
}
