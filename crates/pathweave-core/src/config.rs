//! Configuration for pathweave
//!
//! Configuration is stored as TOML, by default in `pathweave.toml`. Every
//! section and key is optional; missing values take their defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{PathError, Result};

pub use types::{
    DisjointConfig, LoggingConfig, PathweaveConfig, SearchSettings, CONFIG_FILE_NAME,
    CONFIG_FORMAT_VERSION, LOG_LEVELS,
};

impl PathweaveConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: PathweaveConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), algorithm = %config.search.algorithm, "loaded config");
        Ok(config)
    }

    /// Load `pathweave.toml` from `dir`, or the defaults if there is none
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the search entry points cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            return Err(PathError::invalid_value(
                "config version",
                format!(
                    "{} (newest supported is {})",
                    self.version, CONFIG_FORMAT_VERSION
                ),
            ));
        }
        if self.disjoint.paths == 0 {
            crate::bail_invalid!("disjoint.paths", "0 (at least one path is required)");
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            crate::bail_invalid!("logging.level", &self.logging.level);
        }
        Ok(())
    }
}
