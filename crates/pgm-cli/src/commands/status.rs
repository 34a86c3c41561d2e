//! Status command implementation

use anyhow::Result;
use pgm_core::{load_catalog, pending};
use pgm_db::Database;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the status command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await?;

    let catalog = load_catalog(&ctx.base)?;
    let history = if ctx.db.tracking_table_exists().await? {
        ctx.db.applied_migrations().await?
    } else {
        Vec::new()
    };
    let pending = pending(&catalog, &history)?;

    for row in &history {
        let stamp = row
            .created
            .map(|created| created.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_default();
        println!("  applied  {:<40} {}", row.name, stamp);
    }
    for migration in &pending {
        println!("  pending  {}", migration.name);
    }

    println!();
    println!("{} applied, {} pending", history.len(), pending.len());

    Ok(())
}
