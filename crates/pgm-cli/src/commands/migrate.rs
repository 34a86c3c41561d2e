//! Migrate command implementation

use anyhow::Result;
use pgm_runner::Runner;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the migrate command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await?;

    let runner = Runner::new(ctx.db.clone(), ctx.base.clone());
    let report = runner.run().await?;

    for name in &report.applied {
        println!("  Applied: {}", name);
    }

    println!();
    println!(
        "Applied {} migration{} in {:.2}s ({} previously applied, {} total)",
        report.applied.len(),
        if report.applied.len() == 1 { "" } else { "s" },
        report.elapsed_secs,
        report.previously_applied,
        report.total
    );

    Ok(())
}
