//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Leatherman - browse the tool dashboard's navigation from the terminal
#[derive(Parser, Debug)]
#[command(name = "leatherman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./leatherman.toml when present)
    #[arg(long, global = true, env = "LEATHERMAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tool catalog file (defaults to the built-in catalog)
    #[arg(long, global = true, env = "LEATHERMAN_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the sidebar tree as it renders on a route
    ///
    /// Examples:
    ///   leatherman tree                            # Default route
    ///   leatherman tree -p /tools/json/format      # Expanded for JSON > Format
    Tree {
        /// Route the dashboard is opened on
        #[arg(short, long, default_value = "/")]
        path: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the breadcrumb trail for a path
    Breadcrumb {
        /// Path to resolve (not redirected)
        path: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Search tools the way the quick-open palette does
    Search {
        /// Case-insensitive query; every word must match
        #[arg(default_value = "")]
        query: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List every route the dashboard recognises
    Routes {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Replay a navigation script and print the resulting tree
    ///
    /// Steps:
    ///   go:<path>       navigate to a route
    ///   toggle:<node>   expand/collapse a node (e.g. toggle:string--URL)
    ///   pick:<id>       select a tool in the palette
    ///
    /// Example:
    ///   leatherman session go:/tools/json/format toggle:string pick:trim
    Session {
        /// Route the session starts on
        #[arg(short, long, default_value = "/")]
        start: String,

        /// Steps to replay, in order
        steps: Vec<String>,
    },
}
