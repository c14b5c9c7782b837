//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::similarity::DEFAULT_SIMILAR_LIMIT;

/// Index configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Category labels allowed into the index
    #[serde(default)]
    pub categories: Vec<String>,

    /// Extra JSON file of category labels, merged with `categories`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories_file: Option<PathBuf>,

    /// Default number of similar venues to return
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            categories_file: None,
            similar_limit: default_similar_limit(),
        }
    }
}

fn default_similar_limit() -> usize {
    DEFAULT_SIMILAR_LIMIT
}
