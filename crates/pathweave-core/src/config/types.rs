//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::types::{Algorithm, Disjointness, QueueDiscipline, SearchConfig};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default file name for a pathweave configuration
pub const CONFIG_FILE_NAME: &str = "pathweave.toml";

/// Top-level pathweave configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathweaveConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Single path search settings
    #[serde(default)]
    pub search: SearchSettings,

    /// Disjoint path settings
    #[serde(default)]
    pub disjoint: DisjointConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Algorithm choice for single path searches.
///
/// The optional switches override the algorithm's fixed configuration one
/// by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub algorithm: Algorithm,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<QueueDiscipline>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_at_first_pop: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_frontier: Option<bool>,
}

impl SearchSettings {
    /// Resolve the algorithm and overrides into one search configuration
    pub fn search_config(&self) -> SearchConfig {
        let base = self.algorithm.config();
        SearchConfig {
            queue: self.queue.unwrap_or(base.queue),
            stop_at_first_pop: self.stop_at_first_pop.unwrap_or(base.stop_at_first_pop),
            sort_frontier: self.sort_frontier.unwrap_or(base.sort_frontier),
        }
    }

    /// True when any switch deviates from the named algorithm
    pub fn is_customized(&self) -> bool {
        self.search_config() != self.algorithm.config()
    }
}

/// Settings for k disjoint path searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisjointConfig {
    /// Edge-disjoint (Bhandari) or node-disjoint (Suurballe)
    #[serde(default)]
    pub mode: Disjointness,

    /// Number of paths to find (default 2)
    #[serde(default = "default_paths")]
    pub paths: usize,
}

/// Configuration for log output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter level: error, warn, info, debug or trace (default warn)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_paths() -> usize {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for PathweaveConfig {
    fn default() -> Self {
        PathweaveConfig {
            version: default_version(),
            search: SearchSettings::default(),
            disjoint: DisjointConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DisjointConfig {
    fn default() -> Self {
        DisjointConfig {
            mode: Disjointness::default(),
            paths: default_paths(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Log levels accepted by [`LoggingConfig::level`]
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
