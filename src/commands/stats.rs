//! `venue-search stats` command - index size summary

use serde_json::json;

use crate::commands::dispatch::{print_json, CommandContext};
use crate::output_by_format_result;
use venue_search_core::error::Result;
use venue_search_core::VenueIndex;

/// Execute the stats command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let venues = ctx.load_venues()?;
    let gate = ctx.gate()?;
    let categories = gate.len();

    let mut index = VenueIndex::new(gate);
    index.index_venues(&venues)?;
    let stats = index.stats();

    output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({
            "records": venues.len(),
            "venues": stats.venues,
            "words": stats.words,
            "nodes": stats.nodes,
            "categories": categories,
        })),
        human => {
            println!("Records:    {}", venues.len());
            println!("Venues:     {}", stats.venues);
            println!("Words:      {}", stats.words);
            println!("Nodes:      {}", stats.nodes);
            println!("Categories: {}", categories);
        }
    )
}
