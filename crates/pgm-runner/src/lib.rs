//! pgm-runner - Migration runner for pgmigrate
//!
//! This crate orchestrates a migration run: tracking-table bootstrap,
//! exclusive locking, catalog/history reconciliation, and the sequential
//! apply-and-record loop.

pub mod error;
pub mod runner;

pub use error::{RunnerError, RunnerResult};
pub use runner::{RunReport, Runner};
