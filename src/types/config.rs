//! Configuration structures.
//!
//! Configuration is loaded from a JSON file; every section falls back to its defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default name of the item envelope's wrapper field.
pub const DEFAULT_ITEM_FIELD: &str = "Item";

/// Default `L`/`M` nesting bound, the same as `serde_json`'s parser recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Decoder configuration.
    #[serde(default)]
    pub decoder: DecoderConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// Decoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DecoderConfig {
    /// Wrapper field holding the attribute map of an item envelope.
    pub item_field: String,

    /// Maximum `L`/`M` nesting depth. The top-level value is depth 0.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            item_field: DEFAULT_ITEM_FIELD.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}
