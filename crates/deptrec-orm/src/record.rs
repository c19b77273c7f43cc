//! The mapping contract between a Rust type and its table, and the SQL
//! text derived from it.
//!
//! Only identifiers declared in [`Record::TABLE`] and [`Record::COLUMNS`]
//! are ever formatted into SQL. Attribute values always travel as bound
//! parameters.

use rusqlite::types::ToSql;

/// Declared SQLite storage class of a mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
    /// `TEXT`
    Text,
    /// `BLOB`
    Blob,
}

impl SqlType {
    /// Returns the type name used in `CREATE TABLE`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
        }
    }
}

/// One non-key column of a mapped table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name.
    pub name: &'static str,
    /// Declared type.
    pub sql_type: SqlType,
}

impl Column {
    /// Declares a `TEXT` column.
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            sql_type: SqlType::Text,
        }
    }
}

/// A type that maps onto exactly one table with an `id INTEGER PRIMARY KEY`.
///
/// `COLUMNS` lists every other column in table order, and [`Record::values`]
/// must yield one value per column in that same order.
pub trait Record: Clone {
    /// Table name, conventionally the plural of the type name.
    const TABLE: &'static str;

    /// Non-key columns in declaration order.
    const COLUMNS: &'static [Column];

    /// The primary key, or `None` if the record has never been saved.
    fn id(&self) -> Option<i64>;

    /// Records the primary key the database assigned on insert.
    fn set_id(&mut self, id: i64);

    /// Attribute values to bind, one per entry of `COLUMNS`.
    fn values(&self) -> Vec<&dyn ToSql>;
}

fn column_names<R: Record>() -> impl Iterator<Item = &'static str> {
    R::COLUMNS.iter().map(|c| c.name)
}

pub(crate) fn create_table_sql<R: Record>() -> String {
    let mut defs = vec!["id INTEGER PRIMARY KEY".to_string()];
    defs.extend(
        R::COLUMNS
            .iter()
            .map(|c| format!("{} {}", c.name, c.sql_type.as_str())),
    );
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        R::TABLE,
        defs.join(", ")
    )
}

pub(crate) fn drop_table_sql<R: Record>() -> String {
    format!("DROP TABLE IF EXISTS {}", R::TABLE)
}

pub(crate) fn insert_sql<R: Record>() -> String {
    let columns = column_names::<R>().collect::<Vec<_>>().join(", ");
    let placeholders = (1..=R::COLUMNS.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({columns}) VALUES ({placeholders})",
        R::TABLE
    )
}

/// The key is bound last, as `?{COLUMNS.len() + 1}`.
pub(crate) fn update_sql<R: Record>() -> String {
    let assignments = column_names::<R>()
        .enumerate()
        .map(|(i, name)| format!("{name} = ?{}", i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {assignments} WHERE id = ?{}",
        R::TABLE,
        R::COLUMNS.len() + 1
    )
}

pub(crate) fn delete_sql<R: Record>() -> String {
    format!("DELETE FROM {} WHERE id = ?1", R::TABLE)
}
