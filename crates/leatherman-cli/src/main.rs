//! Leatherman CLI
//!
//! Terminal front end for the dashboard's navigation: sidebar tree,
//! breadcrumbs, palette search and route listing.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::AppContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = leatherman_nav::logging::init(log_directive(cli.verbose)) {
        eprintln!("{} failed to initialise logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let Some(cmd) = cli.command else {
        println!("{} Leatherman tool navigator", "leatherman".green().bold());
        println!();
        println!("Run {} for available commands.", "leatherman --help".cyan());
        return Ok(());
    };

    let ctx = AppContext::from_flags(cli.config, cli.catalog)?;
    execute_command(&ctx, cmd)
}

/// Default tracing directive when `RUST_LOG` is unset.
fn log_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn execute_command(ctx: &AppContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Tree { path, json } => commands::run_tree(ctx, &path, json),
        Commands::Breadcrumb { path, json } => commands::run_breadcrumb(ctx, &path, json),
        Commands::Search { query, json } => commands::run_search(ctx, &query, json),
        Commands::Routes { json } => commands::run_routes(ctx, json),
        Commands::Session { start, steps } => commands::run_session(ctx, &start, &steps),
    }
}
