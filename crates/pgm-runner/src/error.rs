//! Error types for pgm-runner

use pgm_core::CoreError;
use pgm_db::DbError;
use thiserror::Error;

/// Migration run errors
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Catalog, config, segmentation, or reconciliation failure (R001)
    #[error("[R001] {0}")]
    Core(#[from] CoreError),

    /// Database failure outside migration-statement execution (R002)
    #[error("[R002] {0}")]
    Db(#[from] DbError),

    /// A migration statement failed; the run is rolled back (R003)
    #[error("[R003] Statement {index} of migration '{migration}' failed: {source}")]
    StatementFailed {
        migration: String,
        index: usize,
        source: DbError,
    },

    /// A pending catalog entry carries no source file path (R004)
    #[error("[R004] Migration '{name}' has no source file to read")]
    MissingSource { name: String },
}

/// Result type alias for RunnerError
pub type RunnerResult<T> = Result<T, RunnerError>;
