//! Catalog-vs-history reconciliation.
//!
//! History is an immutable prefix of the catalog: every applied row must
//! match the catalog entry at the same position. Anything else means stale
//! code was deployed against a newer database, or branched migration sets
//! were merged out of order. Both are fatal.

use crate::error::{CoreError, CoreResult};
use crate::migration::Migration;

/// Diff `catalog` against `history`, returning the pending suffix.
///
/// Fails with [`CoreError::HistoryLongerThanCatalog`] when the database has
/// applied migrations this codebase does not declare, and with
/// [`CoreError::DivergentHistory`] at the first position where the names
/// disagree. On success the returned slice may be empty (nothing to do).
pub fn pending(catalog: &[Migration], history: &[Migration]) -> CoreResult<Vec<Migration>> {
    if history.len() > catalog.len() {
        return Err(CoreError::HistoryLongerThanCatalog {
            history: history.len(),
            catalog: catalog.len(),
        });
    }

    for (index, (declared, applied)) in catalog.iter().zip(history.iter()).enumerate() {
        if declared.name != applied.name {
            return Err(CoreError::DivergentHistory {
                index,
                expected: declared.name.clone(),
                found: applied.name.clone(),
            });
        }
    }

    Ok(catalog[history.len()..].to_vec())
}

#[cfg(test)]
#[path = "reconciler_test.rs"]
mod tests;
