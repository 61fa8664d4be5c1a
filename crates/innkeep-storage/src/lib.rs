//! Innkeep Storage Layer
//!
//! SQLite-based persistence standing in for the device's key/value storage.
//! The app keeps exactly one durable record in here today (the signed-in
//! session), but everything goes through the same `settings` table.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
