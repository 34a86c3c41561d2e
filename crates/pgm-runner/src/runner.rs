//! Sequential apply-and-record migration runner.
//!
//! One `run()` call bootstraps the tracking table, takes an exclusive lock
//! on it, reconciles the catalog against recorded history, and applies the
//! pending suffix in order, recording one history row per migration.
//!
//! The whole run executes inside a single transaction: the ACCESS EXCLUSIVE
//! lock is transaction-scoped, so holding it for the run's duration forces
//! one enclosing transaction, and a failure anywhere rolls back both the
//! applied statements and their history rows together. Concurrent runners
//! block on the lock, then re-read history and find nothing pending.

use crate::error::{RunnerError, RunnerResult};
use pgm_core::{load_catalog, pending, segment, CoreError, Migration};
use pgm_db::Database;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Summary of one migration run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Migrations declared in the catalog
    pub total: usize,

    /// Migrations already recorded before this run
    pub previously_applied: usize,

    /// Names applied by this run, in apply order
    pub applied: Vec<String>,

    /// Wall-clock duration of the run
    pub elapsed_secs: f64,
}

/// Migration runner: an immutable context over a database session and the
/// manifest base directory. All state lives in the database and on disk;
/// calls have no hidden ordering dependencies between them.
pub struct Runner {
    db: Arc<dyn Database>,
    base: PathBuf,
}

impl Runner {
    /// Create a runner for the manifest rooted at `base`
    pub fn new(db: Arc<dyn Database>, base: impl Into<PathBuf>) -> Self {
        Self {
            db,
            base: base.into(),
        }
    }

    /// Apply all pending migrations and record them.
    ///
    /// Any error aborts the run, rolls back the transaction, and releases
    /// the lock; previously committed runs are never touched.
    pub async fn run(&self) -> RunnerResult<RunReport> {
        let started = Instant::now();
        log::debug!(
            "migration run starting against {} (base: {})",
            self.db.db_type(),
            self.base.display()
        );

        self.db.set_strictest_isolation().await?;
        self.bootstrap().await?;

        self.db.begin().await?;
        match self.apply_pending().await {
            Ok((total, previously_applied, applied)) => {
                if let Err(commit_err) = self.db.commit().await {
                    let _ = self.db.rollback().await;
                    return Err(commit_err.into());
                }
                let elapsed_secs = started.elapsed().as_secs_f64();
                log::info!(
                    "applied {} of {} migrations in {:.3}s",
                    applied.len(),
                    total,
                    elapsed_secs
                );
                Ok(RunReport {
                    total,
                    previously_applied,
                    applied,
                    elapsed_secs,
                })
            }
            Err(err) => {
                let _ = self.db.rollback().await;
                Err(err)
            }
        }
    }

    /// Create the tracking table when absent
    async fn bootstrap(&self) -> RunnerResult<()> {
        if !self.db.tracking_table_exists().await? {
            log::info!("creating migration tracking table");
            self.db.create_tracking_table().await?;
        }
        Ok(())
    }

    /// Lock, reconcile, and apply; runs inside the open transaction.
    ///
    /// Returns (catalog size, previously applied count, names applied now).
    async fn apply_pending(&self) -> RunnerResult<(usize, usize, Vec<String>)> {
        self.db.lock_tracking_table().await?;

        let catalog = load_catalog(&self.base)?;
        let history = self.db.applied_migrations().await?;
        // Single pass: the lock excludes concurrent changes for the rest of
        // the transaction, so the pending list is not re-evaluated mid-run.
        let pending = pending(&catalog, &history)?;

        if pending.is_empty() {
            log::info!("migration history is up to date, nothing to apply");
        }

        let mut applied = Vec::with_capacity(pending.len());
        for migration in &pending {
            self.apply_one(migration).await?;
            applied.push(migration.name.clone());
        }

        Ok((catalog.len(), history.len(), applied))
    }

    /// Segment one migration file, execute its statements in order, and
    /// record the history row
    async fn apply_one(&self, migration: &Migration) -> RunnerResult<()> {
        let Some(path) = migration.filepath.as_deref() else {
            return Err(RunnerError::MissingSource {
                name: migration.name.clone(),
            });
        };

        let text = fs::read_to_string(path).map_err(|source| CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        })?;
        let statements = segment(path, &text)?;

        log::info!(
            "applying migration '{}' ({} statements)",
            migration.name,
            statements.len()
        );
        for (index, statement) in statements.iter().enumerate() {
            log::debug!("  statement {}: {}", index, statement);
            self.db
                .execute(statement)
                .await
                .map_err(|source| RunnerError::StatementFailed {
                    migration: migration.name.clone(),
                    index,
                    source,
                })?;
        }

        self.db.record_migration(migration).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
