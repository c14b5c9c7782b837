//! Character trie over venue keys
//!
//! Nodes live in a single arena (`Vec<Node>`) and refer to each other by
//! index. Venues live in a separate table; nodes store slots into that
//! table, one slot per venue id, so deduplication by id is a lookup of the
//! `(node, slot)` pair.
//!
//! Every node on an inserted word's path records the venue, so a prefix
//! search returns venues for all words under that prefix.

mod node;

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::venue::{Venue, VenueId};
use node::{Node, NodeId, Slot, ROOT};

/// Maximum number of completions returned by a search
pub const MAX_SUGGESTIONS: usize = 5;

/// Result of a prefix search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult<'v> {
    /// Venues indexed under any word starting with the prefix
    pub venues: Vec<&'v Venue>,
    /// Up to five complete indexed words starting with the prefix
    pub suggestions: Vec<String>,
}

impl SearchResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty() && self.suggestions.is_empty()
    }
}

/// Size counters for an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Arena nodes, including the root
    pub nodes: usize,
    /// Distinct indexed words
    pub words: usize,
    /// Distinct venue ids
    pub venues: usize,
}

/// Prefix index borrowing the venues it indexes
#[derive(Debug)]
pub struct PrefixIndex<'v> {
    nodes: Vec<Node>,
    venues: Vec<&'v Venue>,
    slots: HashMap<&'v VenueId, Slot>,
    /// Every `(node, slot)` pair already recorded
    memberships: HashSet<(NodeId, Slot)>,
}

impl Default for PrefixIndex<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'v> PrefixIndex<'v> {
    /// Create an empty index holding only the root
    pub fn new() -> Self {
        PrefixIndex {
            nodes: vec![Node::default()],
            venues: Vec::new(),
            slots: HashMap::new(),
            memberships: HashSet::new(),
        }
    }

    /// Index `venue` under `word`; empty words are ignored
    pub fn insert(&mut self, word: &str, venue: &'v Venue) {
        if word.is_empty() {
            return;
        }

        let slot = self.slot_for(venue);
        let mut current = ROOT;
        for ch in word.to_lowercase().chars() {
            current = self.child_or_insert(current, ch);
            if self.memberships.insert((current, slot)) {
                self.nodes[current].venues.push(slot);
            }
        }
        self.nodes[current].end_of_word = true;
    }

    /// Look up a prefix (case-insensitive)
    pub fn search(&self, prefix: &str) -> SearchResult<'v> {
        let prefix = prefix.to_lowercase();
        let Some(matched) = self.find(&prefix) else {
            return SearchResult::default();
        };

        SearchResult {
            venues: self.nodes[matched]
                .venues
                .iter()
                .map(|&slot| self.venues[slot])
                .collect(),
            suggestions: self.completions(matched, &prefix),
        }
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            nodes: self.nodes.len(),
            words: self.nodes.iter().filter(|n| n.end_of_word).count(),
            venues: self.venues.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// First venue record seen for each id wins the slot
    fn slot_for(&mut self, venue: &'v Venue) -> Slot {
        if let Some(&slot) = self.slots.get(&venue.id) {
            return slot;
        }
        let slot = self.venues.len();
        self.venues.push(venue);
        self.slots.insert(&venue.id, slot);
        slot
    }

    fn child_or_insert(&mut self, parent: NodeId, ch: char) -> NodeId {
        if let Some(&child) = self.nodes[parent].children.get(&ch) {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(Node::default());
        self.nodes[parent].children.insert(ch, child);
        child
    }

    fn find(&self, folded: &str) -> Option<NodeId> {
        folded.chars().try_fold(ROOT, |current, ch| {
            self.nodes[current].children.get(&ch).copied()
        })
    }

    /// Depth-first walk below `start`, smallest character first, stopping
    /// once `MAX_SUGGESTIONS` words are found
    fn completions(&self, start: NodeId, prefix: &str) -> Vec<String> {
        let mut found = Vec::new();
        // One shared path buffer; each entry remembers the parent's length
        let mut path = prefix.to_string();
        let mut stack: Vec<(NodeId, usize, Option<char>)> = vec![(start, path.len(), None)];

        while let Some((current, parent_len, ch)) = stack.pop() {
            path.truncate(parent_len);
            if let Some(ch) = ch {
                path.push(ch);
            }

            let node = &self.nodes[current];
            if node.end_of_word {
                found.push(path.clone());
                if found.len() == MAX_SUGGESTIONS {
                    break;
                }
            }
            // Reverse push so the smallest child is popped first
            for (&next, &child) in node.children.iter().rev() {
                stack.push((child, path.len(), Some(next)));
            }
        }

        found
    }
}
