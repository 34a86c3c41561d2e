//! pgm-core - Core library for pgmigrate
//!
//! This crate provides the migration data model, manifest/catalog loading,
//! the SQL statement segmenter, the history reconciler, and connection
//! configuration shared across all pgmigrate components.

pub mod catalog;
pub mod checksum;
pub mod config;
pub mod error;
pub mod migration;
pub mod reconciler;
pub mod segmenter;

pub use catalog::{load_catalog, MANIFEST_FILENAME, MIGRATIONS_DIR};
pub use checksum::md5_hex;
pub use config::ConnectParams;
pub use error::{CoreError, CoreResult};
pub use migration::Migration;
pub use reconciler::pending;
pub use segmenter::segment;
