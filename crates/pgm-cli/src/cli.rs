//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// pgmigrate - applies ordered SQL migrations to PostgreSQL exactly once
#[derive(Parser, Debug)]
#[command(name = "pgm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base directory containing the manifest and migrations/
    #[arg(short = 'b', long, global = true, default_value = ".")]
    pub base_dir: String,

    /// Environment-keyed YAML connection file (database.yml style)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Environment to select from the connection file
    #[arg(short, long, global = true, default_value = "development")]
    pub environment: String,

    /// Database server host (overrides the connection file)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Database server port (overrides the connection file)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Database name (overrides the connection file)
    #[arg(short = 'd', long, global = true)]
    pub dbname: Option<String>,

    /// Login user (overrides the connection file)
    #[arg(short = 'U', long, global = true)]
    pub user: Option<String>,

    /// Login password
    #[arg(long, global = true, env = "PGM_PASSWORD")]
    pub password: Option<String>,

    /// Extra libpq key=value pair passed through to the driver (repeatable)
    #[arg(short = 'o', long = "option", global = true, value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply all pending migrations and record them
    Migrate,

    /// Show applied and pending migrations without changing anything
    Status,
}

/// Parse a `key=value` option pair
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
