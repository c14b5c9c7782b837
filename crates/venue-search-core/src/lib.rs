//! Venue Search Core Library
//!
//! Prefix search and similar-venue ranking over an in-memory venue catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod gate;
pub mod index;
pub mod logging;
pub mod similarity;
pub mod trie;
pub mod venue;

pub use gate::CategoryGate;
pub use index::VenueIndex;
pub use trie::{IndexStats, PrefixIndex, SearchResult};
pub use venue::{Location, ServiceEntry, ServiceRef, Venue, VenueId};
