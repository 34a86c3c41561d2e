//! Error types for pgm-core

use thiserror::Error;

/// Core error type for pgmigrate
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Connection config file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse connection config file
    #[error("[E002] Failed to parse config: {0}")]
    ConfigParseError(#[from] serde_yaml::Error),

    /// E003: Invalid connection config value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: Manifest file not found under the base directory
    #[error("[E004] Manifest not found: {path}")]
    ManifestNotFound { path: String },

    /// E005: Manifest names a migration whose backing file is missing
    #[error("[E005] Migration file for '{name}' not found: {path}")]
    MissingMigrationFile { name: String, path: String },

    /// E006: The same migration name appears twice in the manifest
    #[error("[E006] Duplicate migration name: {name}")]
    DuplicateMigration { name: String },

    /// E007: A migration file segmented into zero statements
    #[error("[E007] Migration contains no statements: {path}")]
    EmptyMigration { path: String },

    /// E008: The database recorded more migrations than the manifest declares
    #[error(
        "[E008] History has {history} applied migrations but the catalog only declares {catalog}: \
         the database is ahead of this codebase"
    )]
    HistoryLongerThanCatalog { history: usize, catalog: usize },

    /// E009: Catalog and history disagree at a shared position
    #[error(
        "[E009] Migration history diverges at position {index}: catalog declares '{expected}' \
         but the database applied '{found}'"
    )]
    DivergentHistory {
        index: usize,
        expected: String,
        found: String,
    },

    /// E010: IO error with file path context
    #[error("[E010] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
