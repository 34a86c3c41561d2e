//! Runtime context for CLI commands

use anyhow::{bail, Context, Result};
use pgm_core::ConnectParams;
use pgm_db::{Database, PostgresBackend};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Runtime context containing the database session and manifest base path
pub struct RuntimeContext {
    /// Database session
    pub db: Arc<dyn Database>,

    /// Directory containing the manifest and migrations/
    pub base: PathBuf,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub async fn new(args: &GlobalArgs) -> Result<Self> {
        let params = resolve_params(args)?;
        let db: Arc<dyn Database> = Arc::new(
            PostgresBackend::connect(&params)
                .await
                .context("Failed to connect to database")?,
        );

        Ok(Self {
            db,
            base: PathBuf::from(&args.base_dir),
        })
    }
}

/// Resolve connection parameters: environment file first, direct flags on
/// top, `--option` pairs appended.
pub fn resolve_params(args: &GlobalArgs) -> Result<ConnectParams> {
    let mut params = match &args.config {
        Some(config) => ConnectParams::from_env_file(Path::new(config), &args.environment)
            .context("Failed to load connection config")?,
        None => ConnectParams::default(),
    };

    if args.host.is_some() {
        params.host = args.host.clone();
    }
    if args.port.is_some() {
        params.port = args.port;
    }
    if args.dbname.is_some() {
        params.dbname = args.dbname.clone();
    }
    if args.user.is_some() {
        params.user = args.user.clone();
    }
    if args.password.is_some() {
        params.password = args.password.clone();
    }
    params.extra.extend(args.options.iter().cloned());

    if params.dbname.is_none() {
        bail!("no database name configured; pass --dbname or --config with --environment");
    }

    Ok(params)
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
