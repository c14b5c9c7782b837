//! Loading venue records and category lists from JSON files
//!
//! A venue catalog is either a JSON array of venue records or an object
//! with a `venues` array. A category list is a JSON array of labels.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, VenueError};
use crate::venue::{Venue, VenueId};

#[derive(Deserialize)]
struct WrappedCatalog {
    venues: Vec<Venue>,
}

/// Read a venue catalog
pub fn load_venues(path: &Path) -> Result<Vec<Venue>> {
    let content = fs::read_to_string(path)?;
    let venues = parse_venues(&content).map_err(|e| VenueError::invalid_catalog(path, e))?;
    debug!(path = %path.display(), venues = venues.len(), "load_venues");
    Ok(venues)
}

/// Parse a venue catalog from JSON text
///
/// The shape is chosen from the first non-whitespace character, so errors
/// point at the offending record instead of a generic shape mismatch.
pub fn parse_venues(content: &str) -> std::result::Result<Vec<Venue>, serde_json::Error> {
    if content.trim_start().starts_with('{') {
        let wrapped: WrappedCatalog = serde_json::from_str(content)?;
        Ok(wrapped.venues)
    } else {
        serde_json::from_str(content)
    }
}

/// Read a JSON array of category labels
pub fn load_categories(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let labels: Vec<String> =
        serde_json::from_str(&content).map_err(|e| VenueError::invalid_catalog(path, e))?;
    debug!(path = %path.display(), categories = labels.len(), "load_categories");
    Ok(labels)
}

/// Find the first venue carrying `id`
pub fn find_venue<'a>(venues: &'a [Venue], id: &str) -> Result<&'a Venue> {
    let id = VenueId::new(id);
    venues
        .iter()
        .find(|v| v.id == id)
        .ok_or_else(|| VenueError::VenueNotFound { id: id.to_string() })
}
