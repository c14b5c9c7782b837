//! Venue index: the prefix trie plus the category gate
//!
//! A venue is indexed under its name, city, province, allowed categories
//! and named services. Categories outside the gate are skipped silently.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace};

use crate::bail_invalid;
use crate::error::Result;
use crate::gate::CategoryGate;
use crate::similarity;
use crate::trace_time;
use crate::trie::{IndexStats, PrefixIndex, SearchResult};
use crate::venue::Venue;

pub use crate::similarity::SimilarityResult;

/// Searchable index over a borrowed set of venues
///
/// Built once per query session through [`VenueIndex::index_venues`] and read
/// afterwards. `search` and the similarity queries take `&self`, so a built
/// index can be shared between readers.
#[derive(Debug)]
pub struct VenueIndex<'v> {
    trie: PrefixIndex<'v>,
    gate: Arc<CategoryGate>,
}

impl<'v> VenueIndex<'v> {
    /// Create an empty index gated by `gate`
    pub fn new(gate: Arc<CategoryGate>) -> Self {
        VenueIndex {
            trie: PrefixIndex::new(),
            gate,
        }
    }

    /// Create an empty index from a list of allowed category labels
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Arc::new(CategoryGate::new(categories)))
    }

    pub fn gate(&self) -> &CategoryGate {
        &self.gate
    }

    /// Index a single venue
    ///
    /// A venue with a blank id is rejected before the trie is touched.
    #[tracing::instrument(skip_all, fields(venue_id = %venue.id))]
    pub fn index_venue(&mut self, venue: &'v Venue) -> Result<()> {
        validate(venue)?;
        self.index_fields(venue);
        Ok(())
    }

    /// Index every venue in `venues`
    ///
    /// All ids are validated first, so a rejected batch leaves the index
    /// unchanged.
    #[tracing::instrument(skip_all, fields(venues = venues.len()))]
    pub fn index_venues(&mut self, venues: &'v [Venue]) -> Result<()> {
        let start = Instant::now();

        for venue in venues {
            validate(venue)?;
        }
        for venue in venues {
            self.index_fields(venue);
        }

        let stats = self.stats();
        trace_time!(start, "index_venues");
        debug!(
            nodes = stats.nodes,
            words = stats.words,
            venues = stats.venues,
            "indexed"
        );
        Ok(())
    }

    /// Prefix search over every indexed key
    pub fn search(&self, prefix: &str) -> SearchResult<'v> {
        let result = self.trie.search(prefix);
        trace!(
            prefix,
            venues = result.venues.len(),
            suggestions = result.suggestions.len(),
            "search"
        );
        result
    }

    /// Venues from `all_venues` most similar to `venue`, best first
    ///
    /// Scores are computed over a fresh index of `all_venues` that shares this
    /// index's category gate; this index's own contents are not consulted.
    pub fn find_similar_venues<'a>(
        &self,
        venue: &Venue,
        all_venues: &'a [Venue],
        limit: usize,
    ) -> Result<Vec<&'a Venue>> {
        similarity::find_similar_venues(Arc::clone(&self.gate), venue, all_venues, limit)
    }

    /// Like [`VenueIndex::find_similar_venues`], keeping each venue's score
    pub fn rank_similar_venues<'a>(
        &self,
        venue: &Venue,
        all_venues: &'a [Venue],
        limit: usize,
    ) -> Result<Vec<SimilarityResult<'a>>> {
        similarity::rank_similar_venues(Arc::clone(&self.gate), venue, all_venues, limit)
    }

    pub fn stats(&self) -> IndexStats {
        self.trie.stats()
    }

    fn index_fields(&mut self, venue: &'v Venue) {
        self.trie.insert(&venue.name, venue);

        if let Some(city) = venue.city() {
            self.trie.insert(city, venue);
        }
        if let Some(province) = venue.province() {
            self.trie.insert(province, venue);
        }

        for category in venue.category_labels() {
            if self.gate.is_allowed(category) {
                self.trie.insert(category, venue);
            } else {
                trace!(venue_id = %venue.id, category, "category_not_allowed");
            }
        }

        for service in venue.service_names() {
            self.trie.insert(service, venue);
        }
    }
}

fn validate(venue: &Venue) -> Result<()> {
    if !venue.id.is_valid() {
        bail_invalid!("venue id", format!("{:?} (venue {:?})", venue.id.as_str(), venue.name));
    }
    Ok(())
}
