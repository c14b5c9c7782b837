//! `venue-search category` command - check a label against the allow-list

use serde_json::json;

use crate::commands::dispatch::{print_json, CommandContext};
use crate::output_by_format_result;
use venue_search_core::error::Result;

/// Execute the category command
pub fn execute(ctx: &CommandContext, label: &str) -> Result<()> {
    let allowed = ctx.gate()?.is_allowed(label);

    output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({ "label": label, "allowed": allowed })),
        human => {
            if allowed {
                println!("allowed: {}", label);
            } else {
                println!("not allowed: {}", label);
            }
        }
    )
}
