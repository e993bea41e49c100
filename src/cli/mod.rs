//! CLI module - Command-line interface for Flight Finder
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Flight Finder - counts how many times "flight" can be spelled from a string
#[derive(Parser)]
#[command(name = "flight-finder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API until interrupted
    #[command(alias = "daemon")]
    Serve,

    /// Count and record a single input string
    #[command(alias = "c")]
    Calculate {
        /// Lowercase letters only, at most 100 characters
        input: String,
    },

    /// Show recent queries, newest first
    #[command(alias = "h")]
    History {
        /// Number of entries to show
        #[arg(default_value = "10")]
        limit: usize,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
