//! Migration catalog built from the on-disk manifest.
//!
//! The manifest at `<base>/manifest` declares one migration identifier per
//! line; its order is authoritative and must never be reordered once an
//! entry has been applied anywhere. Each identifier resolves to a SQL file
//! under `<base>/migrations/`.

use crate::checksum::md5_hex;
use crate::error::{CoreError, CoreResult};
use crate::migration::Migration;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Manifest file name under the base directory
pub const MANIFEST_FILENAME: &str = "manifest";

/// Directory holding migration SQL files under the base directory
pub const MIGRATIONS_DIR: &str = "migrations";

/// Line prefix marking a manifest comment
const COMMENT_MARKER: char = '#';

/// Build the ordered migration catalog from `<base>/manifest`.
///
/// Blank lines and `#`-prefixed lines are ignored; ordinals follow the
/// position among kept lines. Every entry's backing file must exist; its
/// content is hashed at load time.
pub fn load_catalog(base: &Path) -> CoreResult<Vec<Migration>> {
    let manifest_path = base.join(MANIFEST_FILENAME);
    if !manifest_path.is_file() {
        return Err(CoreError::ManifestNotFound {
            path: manifest_path.display().to_string(),
        });
    }

    let text = fs::read_to_string(&manifest_path).map_err(|source| CoreError::IoWithPath {
        path: manifest_path.display().to_string(),
        source,
    })?;

    let mut catalog = Vec::new();
    let mut seen = HashSet::new();

    for line in text.lines() {
        let name = line.trim();
        if name.is_empty() || name.starts_with(COMMENT_MARKER) {
            continue;
        }

        if !seen.insert(name.to_string()) {
            return Err(CoreError::DuplicateMigration {
                name: name.to_string(),
            });
        }

        let filepath = base.join(MIGRATIONS_DIR).join(name);
        if !filepath.is_file() {
            return Err(CoreError::MissingMigrationFile {
                name: name.to_string(),
                path: filepath.display().to_string(),
            });
        }

        let content = fs::read_to_string(&filepath).map_err(|source| CoreError::IoWithPath {
            path: filepath.display().to_string(),
            source,
        })?;

        let ordinal = catalog.len() as i32;
        catalog.push(Migration::pending(name, ordinal, filepath, md5_hex(&content)));
    }

    log::debug!(
        "loaded catalog of {} migrations from {}",
        catalog.len(),
        manifest_path.display()
    );

    Ok(catalog)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
