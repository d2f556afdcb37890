//! Storage crate: task persistence and the repository contract the bot drives.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Task
//! - [`repository`] – TaskRepository trait
//! - [`pg_repo`] – PgTaskRepository (PostgreSQL)
//! - [`sqlite_repo`] – SqliteTaskRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod pg_repo;
mod repository;
mod sqlite_pool;
mod sqlite_repo;

#[cfg(test)]
mod sqlite_repo_test;

pub use error::StorageError;
pub use models::Task;
pub use pg_repo::PgTaskRepository;
pub use repository::TaskRepository;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_repo::SqliteTaskRepository;

/// Re-exported so callers can build Postgres options without naming sqlx.
pub use sqlx::postgres::PgConnectOptions;
