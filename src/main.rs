//! ICC - Instant Cache Cleaner
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use icc::cli::{commands, Cli, Commands};
use icc::error::IccResult;
use icc::ui::{self, UiContext};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn (prompts only), 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("icc=warn"),
        1 => EnvFilter::new("icc=info"),
        _ => EnvFilter::new("icc=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let ctx = UiContext::detect().with_auto_yes(cli.yes);
    ui::init_theme();

    match run(cli, &ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            // The console window may close on exit; hold the diagnostics
            // on screen until acknowledged.
            ui::pause(&ctx);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, ctx: &UiContext) -> IccResult<()> {
    match cli.command {
        None | Some(Commands::Clean) => commands::clean(cli.app_dir, ctx).await,
        Some(Commands::Backup) => commands::backup(cli.app_dir, ctx).await,
        Some(Commands::List(args)) => commands::list(args, cli.app_dir, ctx).await,
        Some(Commands::Purge) => commands::purge(cli.app_dir, ctx).await,
    }
}
