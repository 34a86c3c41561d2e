//! Database session trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use pgm_core::Migration;

/// Database session abstraction for the migration engine.
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a single SQL statement, returning the affected-row count
    async fn execute(&self, sql: &str) -> DbResult<u64>;

    /// Raise the session's isolation to the strictest level the backend offers
    async fn set_strictest_isolation(&self) -> DbResult<()>;

    /// Whether the migration tracking table exists
    async fn tracking_table_exists(&self) -> DbResult<bool>;

    /// Create the tracking table (idempotent)
    async fn create_tracking_table(&self) -> DbResult<()>;

    /// Take an exclusive lock on the tracking table.
    ///
    /// The lock is transaction-scoped: call inside `begin`/`commit` and it
    /// serializes concurrent runners for the rest of the transaction.
    async fn lock_tracking_table(&self) -> DbResult<()>;

    /// All applied migrations, ordered by ordinal ascending.
    ///
    /// Read-only; assumes the tracking table exists (bootstrapping is the
    /// runner's job).
    async fn applied_migrations(&self) -> DbResult<Vec<Migration>>;

    /// Record one applied migration in the tracking table
    async fn record_migration(&self, migration: &Migration) -> DbResult<()>;

    /// Open a transaction
    async fn begin(&self) -> DbResult<()>;

    /// Commit the open transaction
    async fn commit(&self) -> DbResult<()>;

    /// Roll back the open transaction
    async fn rollback(&self) -> DbResult<()>;

    /// Backend identifier for logging
    fn db_type(&self) -> &'static str;
}
