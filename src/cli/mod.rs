//! Command-line interface for Filmvault.

use clap::{Parser, Subcommand};

/// Filmvault - movie and director catalog service
#[derive(Parser)]
#[command(name = "filmvault")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API until interrupted (default)
    #[command(alias = "daemon")]
    Serve,

    /// Write a default config.toml if none exists
    Init,
}
