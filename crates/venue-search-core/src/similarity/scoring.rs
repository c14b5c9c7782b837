use std::collections::HashMap;

use serde::Serialize;

use crate::venue::{Venue, VenueId};

/// A candidate venue with its accumulated score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult<'a> {
    pub venue: &'a Venue,
    pub score: u32,
}

/// Running per-candidate scores
///
/// Entries are kept in the order candidates first received a score, which
/// is the tie-break order of the final ranking.
#[derive(Debug, Default)]
pub struct ScoreBoard<'a> {
    positions: HashMap<&'a VenueId, usize>,
    entries: Vec<SimilarityResult<'a>>,
}

impl<'a> ScoreBoard<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to every venue in `matches` except `exclude`
    pub fn add_matches(&mut self, matches: &[&'a Venue], exclude: &VenueId, weight: u32) {
        for &venue in matches {
            if &venue.id != exclude {
                self.add(venue, weight);
            }
        }
    }

    pub fn add(&mut self, venue: &'a Venue, weight: u32) {
        if weight == 0 {
            return;
        }
        match self.positions.get(&venue.id) {
            Some(&pos) => self.entries[pos].score += weight,
            None => {
                self.positions.insert(&venue.id, self.entries.len());
                self.entries.push(SimilarityResult {
                    venue,
                    score: weight,
                });
            }
        }
    }

    pub fn score(&self, id: &VenueId) -> u32 {
        self.positions
            .get(id)
            .map_or(0, |&pos| self.entries[pos].score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest scores first, ties in first-scored order, at most `limit`
    pub fn into_ranked(self, limit: usize) -> Vec<SimilarityResult<'a>> {
        let mut ranked: Vec<_> = self.entries.into_iter().filter(|r| r.score > 0).collect();
        // `sort_by` is stable, which keeps first-scored order among ties
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_accumulate_per_id() {
        let a = Venue::new("a", "A");
        let a_again = Venue::new("a", "A copy");
        let mut board = ScoreBoard::new();
        board.add(&a, 3);
        board.add(&a_again, 2);

        assert_eq!(board.len(), 1);
        assert_eq!(board.score(&VenueId::new("a")), 5);
    }

    #[test]
    fn test_excluded_id_never_scores() {
        let a = Venue::new("a", "A");
        let b = Venue::new("b", "B");
        let mut board = ScoreBoard::new();
        board.add_matches(&[&a, &b], &VenueId::new("a"), 3);

        assert_eq!(board.score(&VenueId::new("a")), 0);
        assert_eq!(board.score(&VenueId::new("b")), 3);
    }

    #[test]
    fn test_ties_keep_first_scored_order() {
        let z = Venue::new("z", "Zeta");
        let a = Venue::new("a", "Alpha");
        let m = Venue::new("m", "Mu");
        let mut board = ScoreBoard::new();
        board.add(&z, 2);
        board.add(&a, 2);
        board.add(&m, 5);

        let ranked: Vec<_> = board
            .into_ranked(10)
            .into_iter()
            .map(|r| r.venue.id.to_string())
            .collect();
        assert_eq!(ranked, vec!["m", "z", "a"]);
    }

    #[test]
    fn test_ranking_truncates_to_limit() {
        let venues: Vec<Venue> = (0..5)
            .map(|i| Venue::new(format!("v{i}").as_str(), "V"))
            .collect();
        let mut board = ScoreBoard::new();
        for venue in &venues {
            board.add(venue, 1);
        }

        assert_eq!(board.into_ranked(2).len(), 2);
    }

    #[test]
    fn test_zero_weight_is_not_a_first_score() {
        let a = Venue::new("a", "A");
        let mut board = ScoreBoard::new();
        board.add(&a, 0);

        assert!(board.is_empty());
    }
}
