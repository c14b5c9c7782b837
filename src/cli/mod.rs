//! CLI argument parsing for venue-search
//!
//! Supports global flags: --config, --venues, --allow, --format, --quiet, --verbose

pub mod format;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use venue_search_core::format::OutputFormat;

/// venue-search - prefix search and similar-venue lookup over a venue catalog
#[derive(Parser, Debug)]
#[command(name = "venue-search")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "VENUE_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Venue catalog (JSON array of venue records)
    #[arg(long, global = true, env = "VENUE_SEARCH_VENUES")]
    pub venues: Option<PathBuf>,

    /// Allow an additional category label (can be specified multiple times)
    #[arg(long, global = true, action = clap::ArgAction::Append)]
    pub allow: Vec<String>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find venues and completions for a prefix
    Search {
        /// Prefix to look up (case-insensitive)
        prefix: String,
    },

    /// Recommend venues similar to a catalog venue
    Similar {
        /// Id of the venue to compare against
        id: String,

        /// Maximum number of venues to return (defaults to the configured limit)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Check whether a category label is allowed into the index
    Category {
        /// Category label
        label: String,
    },

    /// Show index size statistics
    Stats,
}
