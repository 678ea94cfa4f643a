//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::SearchOptions;
use crate::ladder::DEFAULT_ALPHABET;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Top-level configuration, read from `waypath.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypathConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Search caps
    #[serde(default)]
    pub search: SearchConfig,

    /// Word ladder settings
    #[serde(default)]
    pub word: WordConfig,

    /// Grid text markers
    #[serde(default)]
    pub grid: GridMarkers,
}

impl Default for WaypathConfig {
    fn default() -> Self {
        WaypathConfig {
            version: CONFIG_FORMAT_VERSION,
            search: SearchConfig::default(),
            word: WordConfig::default(),
            grid: GridMarkers::default(),
        }
    }
}

/// Caps applied to every search unless overridden on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<usize>,
}

impl From<SearchConfig> for SearchOptions {
    fn from(config: SearchConfig) -> Self {
        SearchOptions {
            max_depth: config.max_depth,
            max_nodes: config.max_nodes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordConfig {
    /// Letters tried at each position, scanned in ascending order
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
}

impl Default for WordConfig {
    fn default() -> Self {
        WordConfig {
            alphabet: default_alphabet(),
        }
    }
}

/// Characters marking passable and blocked cells in grid text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMarkers {
    #[serde(default = "default_passable")]
    pub passable: char,

    #[serde(default = "default_blocked")]
    pub blocked: char,
}

impl Default for GridMarkers {
    fn default() -> Self {
        GridMarkers {
            passable: default_passable(),
            blocked: default_blocked(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

fn default_passable() -> char {
    '.'
}

fn default_blocked() -> char {
    '#'
}
