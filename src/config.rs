//! Engine configuration for graphwalk
//!
//! Configuration is an optional TOML file. Every field has a default, so an
//! empty file (or no file) gives breadth-first traversal, iterative
//! depth-first search, Kahn ordering, Kruskal spanning trees and
//! warn-level compact logging.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::types::TraversalOptions;
use crate::logging::LogOptions;

pub use types::{
    EngineConfig, LoggingConfig, OrderingConfig, SpanningConfig, TraversalConfig,
    CONFIG_FORMAT_VERSION,
};

impl EngineConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), version = config.version, "config loaded");
        Ok(config)
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Reject values no algorithm can honor
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            return Err(GraphError::invalid_value(
                "config version",
                format!(
                    "{} (newest supported is {})",
                    self.version, CONFIG_FORMAT_VERSION
                ),
            ));
        }
        if self.traversal.max_recursion_depth == 0 {
            crate::bail_invalid!("max_recursion_depth", "0 (must be at least 1)");
        }
        self.log_options().validate()
    }

    /// Per-call traversal options derived from the `[traversal]` table
    pub fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions::from(&self.traversal)
    }

    /// Options for `init_tracing` derived from the `[logging]` table
    pub fn log_options(&self) -> LogOptions {
        LogOptions::from(&self.logging)
    }
}
