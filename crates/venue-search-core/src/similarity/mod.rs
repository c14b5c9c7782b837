//! Similar-venue ranking
//!
//! Candidates are scored by weighted overlap with the target venue:
//! every target category that prefix-matches a candidate adds
//! [`CATEGORY_WEIGHT`], a matching city adds [`CITY_WEIGHT`] and each
//! matching service adds [`SERVICE_WEIGHT`].
//!
//! Each query builds a fresh candidate index over exactly the venues it is
//! given. Nothing is cached between calls.

mod scoring;
pub mod weights;

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::gate::CategoryGate;
use crate::index::VenueIndex;
use crate::trace_time;
use crate::venue::Venue;

pub use scoring::{ScoreBoard, SimilarityResult};
pub use weights::{CATEGORY_WEIGHT, CITY_WEIGHT, DEFAULT_SIMILAR_LIMIT, SERVICE_WEIGHT};

/// Rank `all_venues` against `venue`, keeping scores
///
/// Fails only when `all_venues` contains a venue with a blank id.
#[tracing::instrument(skip_all, fields(venue_id = %venue.id, candidates = all_venues.len(), limit = limit))]
pub fn rank_similar_venues<'a>(
    gate: Arc<CategoryGate>,
    venue: &Venue,
    all_venues: &'a [Venue],
    limit: usize,
) -> Result<Vec<SimilarityResult<'a>>> {
    let start = Instant::now();

    let mut candidates = VenueIndex::new(gate);
    candidates.index_venues(all_venues)?;
    trace_time!(start, "candidate_index");

    let board = score_candidates(&candidates, venue, ScoreBoard::new());
    let scored = board.len();
    let ranked = board.into_ranked(limit);

    debug!(scored, returned = ranked.len(), "similar_venues");
    Ok(ranked)
}

/// Rank `all_venues` against `venue` and return the venues only
pub fn find_similar_venues<'a>(
    gate: Arc<CategoryGate>,
    venue: &Venue,
    all_venues: &'a [Venue],
    limit: usize,
) -> Result<Vec<&'a Venue>> {
    Ok(rank_similar_venues(gate, venue, all_venues, limit)?
        .into_iter()
        .map(|r| r.venue)
        .collect())
}

/// Query `candidates` with the target's own fields and accumulate weights
fn score_candidates<'a>(
    candidates: &VenueIndex<'a>,
    target: &Venue,
    mut board: ScoreBoard<'a>,
) -> ScoreBoard<'a> {
    for category in target.category_labels() {
        let matches = candidates.search(category).venues;
        board.add_matches(&matches, &target.id, CATEGORY_WEIGHT);
    }

    if let Some(city) = target.city() {
        let matches = candidates.search(city).venues;
        board.add_matches(&matches, &target.id, CITY_WEIGHT);
    }

    for service in target.service_names() {
        let matches = candidates.search(service).venues;
        board.add_matches(&matches, &target.id, SERVICE_WEIGHT);
    }

    board
}
