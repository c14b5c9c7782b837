//! Configuration for venue-search
//!
//! Configuration lives in a TOML file. Lookup order for [`IndexConfig::discover`]:
//! 1. an explicit path
//! 2. `$VENUE_SEARCH_CONFIG_DIR/config.toml`
//! 3. `<platform config dir>/venue-search/config.toml`
//! 4. built-in defaults

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::bail_invalid;
use crate::catalog;
use crate::error::{Result, VenueError};
use crate::gate::CategoryGate;

pub use types::IndexConfig;

const CONFIG_DIR: &str = "venue-search";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "VENUE_SEARCH_CONFIG_DIR";

impl IndexConfig {
    /// Load configuration from a file
    ///
    /// A relative `categories_file` is resolved against the config file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: IndexConfig = toml::from_str(&content)?;

        if let Some(dir) = path.parent() {
            config.categories_file = config
                .categories_file
                .take()
                .map(|file| if file.is_relative() { dir.join(file) } else { file });
        }

        config.validate()?;
        debug!(path = %path.display(), categories = config.categories.len(), "load_config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VenueError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load from `explicit`, else from the default location, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.similar_limit == 0 {
            bail_invalid!("similar_limit", self.similar_limit);
        }
        Ok(())
    }

    /// All allowed labels: inline `categories` plus `categories_file`
    pub fn category_labels(&self) -> Result<Vec<String>> {
        let mut labels = self.categories.clone();
        if let Some(file) = &self.categories_file {
            labels.extend(catalog::load_categories(file)?);
        }
        Ok(labels)
    }

    /// Build the category gate described by this configuration
    pub fn gate(&self) -> Result<Arc<CategoryGate>> {
        Ok(Arc::new(CategoryGate::new(self.category_labels()?)))
    }
}

fn default_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}
