//! Error types for graphwalk
//!
//! Every fallible operation reports to its immediate caller. Algorithms are
//! pure and deterministic, so re-running with the same input reproduces the
//! same error.

mod macros;

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur during graph analysis
#[derive(Error, Debug)]
pub enum GraphError {
    // Precondition violations
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("graph contains a cycle: {}", .cycle.join(" -> "))]
    Cycle { cycle: Vec<String> },

    #[error("recursion depth limit of {limit} exceeded (use the iterative strategy for deep graphs)")]
    DepthLimitExceeded { limit: usize },

    #[error("{operation} requires an undirected graph")]
    DirectedGraph { operation: String },

    // Input parsing
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex absent from the graph store
    pub fn unknown_vertex(vertex: &impl Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: render_vertex(vertex),
        }
    }

    /// Create an error for an edge weight that violates the non-negative precondition
    pub fn negative_weight(from: &impl Debug, to: &impl Debug, weight: f64) -> Self {
        GraphError::NegativeWeight {
            from: render_vertex(from),
            to: render_vertex(to),
            weight,
        }
    }

    /// Create a cycle error from the vertices along the cycle. The typed
    /// cycle itself is available from `find_cycle`.
    pub fn cycle<V: Debug>(cycle: &[V]) -> Self {
        GraphError::Cycle {
            cycle: cycle.iter().map(render_vertex).collect(),
        }
    }

    /// Create an error for an operation that needs an undirected store
    pub fn directed_graph(operation: &str) -> Self {
        GraphError::DirectedGraph {
            operation: operation.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether this error is a violated algorithm precondition rather than
    /// a parsing or I/O failure
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            GraphError::UnknownVertex { .. }
                | GraphError::NegativeWeight { .. }
                | GraphError::Cycle { .. }
                | GraphError::DepthLimitExceeded { .. }
                | GraphError::DirectedGraph { .. }
        )
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::Cycle { .. } => "cycle",
            GraphError::DepthLimitExceeded { .. } => "depth_limit_exceeded",
            GraphError::DirectedGraph { .. } => "directed_graph",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
            "precondition": self.is_precondition(),
        });

        match self {
            GraphError::UnknownVertex { vertex } => {
                error_obj["vertex"] = serde_json::json!(vertex);
            }
            GraphError::NegativeWeight { from, to, weight } => {
                error_obj["edge"] = serde_json::json!({
                    "from": from,
                    "to": to,
                    "weight": weight,
                });
            }
            GraphError::Cycle { cycle } => {
                error_obj["cycle"] = serde_json::json!(cycle);
            }
            GraphError::DepthLimitExceeded { limit } => {
                error_obj["limit"] = serde_json::json!(limit);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Label a vertex for an error message. String vertices lose the quotes
/// their `Debug` form adds; anything needing escapes keeps them.
fn render_vertex<V: Debug + ?Sized>(vertex: &V) -> String {
    let debug = format!("{:?}", vertex);
    match debug.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) if !inner.contains('\\') => inner.to_string(),
        _ => debug,
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
