//! `venue-search search` command - prefix lookup with completions

use tracing::debug;

use crate::cli::Cli;
use crate::commands::dispatch::{print_json, venue_line, CommandContext};
use crate::output_by_format_result;
use venue_search_core::error::Result;
use venue_search_core::{SearchResult, VenueIndex};

/// Execute the search command
pub fn execute(ctx: &CommandContext, prefix: &str) -> Result<()> {
    let venues = ctx.load_venues()?;
    let mut index = VenueIndex::new(ctx.gate()?);
    index.index_venues(&venues)?;

    let result = index.search(prefix);
    debug!(
        elapsed = ?ctx.start.elapsed(),
        venues = result.venues.len(),
        suggestions = result.suggestions.len(),
        "search"
    );

    output_by_format_result!(ctx.cli.format,
        json => print_json(&result),
        human => { output_human(ctx.cli, &result, prefix) }
    )
}

fn output_human(cli: &Cli, result: &SearchResult<'_>, prefix: &str) {
    if result.is_empty() {
        if !cli.quiet {
            println!("No results found for '{}'", prefix);
        }
        return;
    }

    for venue in &result.venues {
        println!("{}", venue_line(venue));
    }

    if !result.suggestions.is_empty() && !cli.quiet {
        println!();
        println!("Suggestions: {}", result.suggestions.join(", "));
    }
}
