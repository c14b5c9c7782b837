//! Command dispatch logic for venue-search

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{category, search, similar, stats};
use venue_search_core::bail_usage;
use venue_search_core::catalog;
use venue_search_core::config::IndexConfig;
use venue_search_core::error::Result;
use venue_search_core::{CategoryGate, Venue};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: IndexConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: IndexConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Category gate from the configuration plus any `--allow` labels
    pub fn gate(&self) -> Result<Arc<CategoryGate>> {
        let mut labels = self.config.category_labels()?;
        labels.extend(self.cli.allow.iter().cloned());
        Ok(Arc::new(CategoryGate::new(labels)))
    }

    /// Load the venue catalog named by `--venues`
    pub fn load_venues(&self) -> Result<Vec<Venue>> {
        let Some(path) = &self.cli.venues else {
            bail_usage!("this command requires --venues <path>");
        };
        let venues = catalog::load_venues(path)?;
        debug!(elapsed = ?self.start.elapsed(), venues = venues.len(), "load_venues");
        Ok(venues)
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = IndexConfig::discover(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => {
            println!("venue-search {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Prefix search and similar-venue lookup over a venue catalog.");
            println!();
            println!("Run `venue-search --help` for usage information.");
            Ok(())
        }
        Some(Commands::Search { prefix }) => search::execute(&ctx, prefix),
        Some(Commands::Similar { id, limit }) => similar::execute(&ctx, id, *limit),
        Some(Commands::Category { label }) => category::execute(&ctx, label),
        Some(Commands::Stats) => stats::execute(&ctx),
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line human summary of a venue
pub fn venue_line(venue: &Venue) -> String {
    match venue.city() {
        Some(city) => format!("{} {} ({})", venue.id, venue.name, city),
        None => format!("{} {}", venue.id, venue.name),
    }
}
