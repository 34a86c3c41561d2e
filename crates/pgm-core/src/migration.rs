//! The migration record shared between catalog and history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single schema migration.
///
/// Catalog entries are rebuilt from the manifest on every run and carry a
/// resolved `filepath`; history rows come back from the tracking table with
/// the server-assigned `created` timestamp instead. The `filepath` is
/// transient and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Migration {
    /// Unique identifier, taken verbatim from the manifest line
    pub name: String,

    /// Position in the catalog (and apply order), starting at 0
    pub ordinal: i32,

    /// Resolved path to the SQL file; absent on rows read from history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<PathBuf>,

    /// MD5 of the migration file content
    pub md5: String,

    /// Server-assigned apply timestamp; absent until the migration is applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Whether the migration is considered production-grade
    pub production: bool,
}

impl Migration {
    /// A catalog entry that has not been applied yet
    pub fn pending(name: impl Into<String>, ordinal: i32, filepath: PathBuf, md5: String) -> Self {
        Self {
            name: name.into(),
            ordinal,
            filepath: Some(filepath),
            md5,
            created: None,
            production: true,
        }
    }

    /// A history row read back from the tracking table
    pub fn applied(
        name: impl Into<String>,
        ordinal: i32,
        md5: String,
        created: DateTime<Utc>,
        production: bool,
    ) -> Self {
        Self {
            name: name.into(),
            ordinal,
            filepath: None,
            md5,
            created: Some(created),
            production,
        }
    }
}
