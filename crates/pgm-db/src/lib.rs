//! pgm-db - Database abstraction layer for pgmigrate
//!
//! This crate provides the `Database` session trait consumed by the runner
//! and its PostgreSQL implementation.

pub mod error;
pub mod postgres;
pub mod traits;

pub use error::{DbError, DbResult};
pub use postgres::{PostgresBackend, TRACKING_TABLE};
pub use traits::Database;
