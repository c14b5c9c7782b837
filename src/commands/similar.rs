//! `venue-search similar` command - rank catalog venues against one venue

use serde_json::json;
use tracing::debug;

use crate::cli::Cli;
use crate::commands::dispatch::{print_json, venue_line, CommandContext};
use crate::output_by_format_result;
use venue_search_core::bail_usage;
use venue_search_core::catalog;
use venue_search_core::error::Result;
use venue_search_core::index::SimilarityResult;
use venue_search_core::VenueIndex;

/// Execute the similar command
pub fn execute(ctx: &CommandContext, id: &str, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(ctx.config.similar_limit);
    if limit == 0 {
        bail_usage!("--limit must be at least 1");
    }

    let venues = ctx.load_venues()?;
    let target = catalog::find_venue(&venues, id)?;

    let index = VenueIndex::new(ctx.gate()?);
    let ranked = index.rank_similar_venues(target, &venues, limit)?;
    debug!(elapsed = ?ctx.start.elapsed(), results = ranked.len(), "similar");

    output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({ "venue": target.id, "similar": ranked })),
        human => { output_human(ctx.cli, &ranked, id) }
    )
}

fn output_human(cli: &Cli, ranked: &[SimilarityResult<'_>], id: &str) {
    if ranked.is_empty() {
        if !cli.quiet {
            println!("No similar venues for '{}'", id);
        }
        return;
    }

    for result in ranked {
        println!("{:>3}  {}", result.score, venue_line(result.venue));
    }
}
