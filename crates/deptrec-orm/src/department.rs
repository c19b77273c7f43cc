//! The `Department` entity and its `departments` table.

use std::fmt;

use deptrec_db::Database;
use rusqlite::types::ToSql;
use serde::{Deserialize, Serialize};

use crate::error::OrmError;
use crate::record::{Column, Record};
use crate::repository::Repository;
use crate::schema;

/// A department of the company, stored as one row of `departments`.
///
/// ```text
/// departments (id INTEGER PRIMARY KEY, name TEXT, location TEXT)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default)]
    id: Option<i64>,
    /// Display name, e.g. `"Payroll"`.
    pub name: String,
    /// Where the department sits, e.g. `"Building A, 5th Floor"`.
    pub location: String,
}

impl Department {
    /// Creates an unsaved department.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
        }
    }

    /// The primary key, set by the first successful [`Department::save`].
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Creates the `departments` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Schema` if the statement fails.
    pub fn create_table(db: &Database) -> Result<(), OrmError> {
        schema::create_table::<Self>(db)
    }

    /// Drops the `departments` table if it exists.
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Schema` if the statement fails.
    pub fn drop_table(db: &Database) -> Result<(), OrmError> {
        schema::drop_table::<Self>(db)
    }

    /// Inserts this department as a new row and records the assigned id.
    ///
    /// Calling this again on a saved department inserts another row; see
    /// [`Repository::save`].
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Persistence` if the insert fails.
    pub fn save(&mut self, repo: &mut Repository<'_, Self>) -> Result<(), OrmError> {
        repo.save(self)?;
        Ok(())
    }

    /// Builds a department and saves it in one step.
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Persistence` if the insert fails.
    pub fn create(
        repo: &mut Repository<'_, Self>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, OrmError> {
        let mut department = Self::new(name, location);
        department.save(repo)?;
        Ok(department)
    }

    /// Writes the current `name` and `location` to this department's row.
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Precondition` if the department was never saved,
    /// or `OrmError::Persistence` if the update fails.
    pub fn update(&self, repo: &Repository<'_, Self>) -> Result<(), OrmError> {
        repo.update(self)?;
        Ok(())
    }

    /// Deletes this department's row.
    ///
    /// The value stays usable and keeps its old id, which no longer refers
    /// to any row.
    ///
    /// # Errors
    ///
    /// Returns `OrmError::Precondition` if the department was never saved,
    /// or `OrmError::Persistence` if the delete fails.
    pub fn delete(&self, repo: &mut Repository<'_, Self>) -> Result<(), OrmError> {
        repo.delete(self)?;
        Ok(())
    }
}

impl Record for Department {
    const TABLE: &'static str = "departments";
    const COLUMNS: &'static [Column] = &[Column::text("name"), Column::text("location")];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![&self.name, &self.location]
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Department {id}: {}, {}>", self.name, self.location),
            None => write!(f, "<Department None: {}, {}>", self.name, self.location),
        }
    }
}
