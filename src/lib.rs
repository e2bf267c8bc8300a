//! Graphwalk Library
//!
//! Graph traversal, path, connectivity, shortest-path, ordering and
//! spanning-tree algorithms over an insertion-ordered graph store.

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod logging;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{GraphError, Result};
pub use graph::{Direction, Edge, Graph, GraphProvider, TraversalOrder, Visit, VisitedSet, Weight};
pub use logging::{init_tracing, LogFormat, LogOptions};
