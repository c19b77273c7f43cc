//! Active Record mapping for deptrec.
//!
//! Each mapped type owns one table and the statements that keep a row in
//! step with an in-memory value. The schema and persistence logic is
//! written once against the [`Record`] trait; a mapped type only declares
//! its table name, its columns, and how to bind its values.
//!
//! # Lifecycle
//!
//! | Step | Call | Statement |
//! |------|------|-----------|
//! | schema | [`Department::create_table`] | `CREATE TABLE IF NOT EXISTS departments (...)` |
//! | insert | [`Department::save`] / [`Department::create`] | `INSERT INTO departments (...) VALUES (?1, ...)` |
//! | sync | [`Department::update`] | `UPDATE departments SET ... WHERE id = ?N` |
//! | remove | [`Department::delete`] | `DELETE FROM departments WHERE id = ?1` |
//!
//! Every statement runs on its own and commits immediately. There is no
//! transaction spanning calls and no retry.
//!
//! # Usage
//!
//! ```rust,ignore
//! use deptrec_db::Database;
//! use deptrec_orm::{Department, Repository};
//!
//! let db = Database::open_in_memory()?;
//! Department::create_table(&db)?;
//!
//! let mut repo = Repository::with_identity_map(&db);
//! let mut hr = Department::create(&mut repo, "Human Resources", "Building C, East Wing")?;
//! hr.location = "Building C, West Wing".to_string();
//! hr.update(&repo)?;
//! hr.delete(&mut repo)?;
//! ```

mod department;
mod error;
mod identity_map;
mod record;
mod repository;
mod schema;

pub use department::Department;
pub use error::{Operation, OrmError};
pub use identity_map::IdentityMap;
pub use record::{Column, Record, SqlType};
pub use repository::Repository;
pub use schema::{create_table, drop_table};
