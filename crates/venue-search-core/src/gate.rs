//! Category allow-list
//!
//! Labels are sorted once by their lowercase form at construction and
//! never change afterwards, so membership is a binary search.

/// Sorted, case-insensitive allow-list of category labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGate {
    /// Original labels, ordered by their folded form
    labels: Vec<String>,
    /// Lowercase copies, parallel to `labels`
    folded: Vec<String>,
}

impl CategoryGate {
    /// Build a gate from any list of labels
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = labels
            .into_iter()
            .map(|label| {
                let label = label.into();
                (label.to_lowercase(), label)
            })
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let (folded, labels) = pairs.into_iter().unzip();
        CategoryGate { labels, folded }
    }

    /// Whether `label` is on the allow-list, ignoring case
    pub fn is_allowed(&self, label: &str) -> bool {
        let needle = label.to_lowercase();
        self.folded
            .binary_search_by(|probe| probe.as_str().cmp(needle.as_str()))
            .is_ok()
    }

    /// Labels in gate order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
