//! Configuration type definitions

use crate::graph::types::{
    DfsStrategy, Direction, MstMethod, TopoMethod, TraversalOptions, TraversalOrder,
    DEFAULT_MAX_RECURSION_DEPTH,
};
use crate::logging::{LogFormat, LogOptions, DEFAULT_LOG_LEVEL};
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Traversal defaults
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Topological ordering defaults
    #[serde(default)]
    pub ordering: OrderingConfig,

    /// Spanning tree defaults
    #[serde(default)]
    pub spanning: SpanningConfig,

    /// Logging installed by hosts through `init_tracing`
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration for the traversal engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Frontier discipline: "breadth-first" or "depth-first"
    #[serde(default)]
    pub order: TraversalOrder,

    /// Depth-first strategy: "iterative" or "recursive"
    #[serde(default)]
    pub strategy: DfsStrategy,

    /// Adjacency to follow: "out", "in" or "both"
    #[serde(default)]
    pub direction: Direction,

    /// Recursion bound for the recursive strategy
    #[serde(default = "default_max_recursion_depth")]
    pub max_recursion_depth: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// "kahn" or "depth-first"
    #[serde(default)]
    pub topo_method: TopoMethod,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanningConfig {
    /// "kruskal" or "prim"
    #[serde(default)]
    pub mst_method: MstMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Bare level or full filter directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "compact" or "json"
    #[serde(default)]
    pub format: LogFormat,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_max_recursion_depth() -> usize {
    DEFAULT_MAX_RECURSION_DEPTH
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            traversal: TraversalConfig::default(),
            ordering: OrderingConfig::default(),
            spanning: SpanningConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            order: TraversalOrder::default(),
            strategy: DfsStrategy::default(),
            direction: Direction::default(),
            max_recursion_depth: default_max_recursion_depth(),
        }
    }
}

impl From<&TraversalConfig> for TraversalOptions {
    fn from(config: &TraversalConfig) -> Self {
        TraversalOptions {
            order: config.order,
            direction: config.direction,
            strategy: config.strategy,
            max_recursion_depth: config.max_recursion_depth,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl From<&LoggingConfig> for LogOptions {
    fn from(config: &LoggingConfig) -> Self {
        LogOptions {
            level: config.level.clone(),
            format: config.format,
        }
    }
}
