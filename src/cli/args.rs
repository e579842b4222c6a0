//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ICC - Instant Cache Cleaner
///
/// Backs up the client's cache files into a timestamped folder, and
/// bulk-deletes accumulated backups with a measured time estimate.
#[derive(Parser, Debug)]
#[command(name = "icc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (defaults to the full interactive clean)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Auto-approve all confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Override the client data directory (defaults to the per-user
    /// application data directory)
    #[arg(long, global = true, env = "ICC_APP_DIR")]
    pub app_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Back up the client cache, then optionally purge old backups
    Clean,

    /// Back up the client cache files without touching existing backups
    Backup,

    /// List accumulated backups and their sizes
    List(ListArgs),

    /// Delete all accumulated backups
    Purge,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
