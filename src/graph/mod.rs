//! Graph store and algorithms
//!
//! - [`Graph`]: insertion-ordered store behind the [`GraphProvider`] seam
//! - [`algos`]: traversal, paths, connectivity, Dijkstra, ordering, spanning trees
//! - [`frontier`]: the stack, queue and priority frontiers the algorithms run on

pub mod adjacency;
pub mod algos;
pub mod disjoint_set;
pub mod frontier;
pub mod path;
pub mod provider;
pub mod store;
pub mod types;

pub use adjacency::{AdjacencySpec, NeighborSpec};
pub use algos::{
    all_simple_paths, connected_components, find_cycle, find_path, has_cycle, hop_distances,
    is_connected, levels, minimum_spanning_tree, minimum_spanning_tree_with, shortest_hop_path,
    shortest_path, shortest_paths, topological_sort, topological_sort_with, traverse,
    traverse_recursive, traverse_with, traverse_with_options, visit_order, Components, PathEntry,
    ShortestPaths, SpanningForest, WeightedPath,
};
pub use disjoint_set::DisjointSet;
pub use frontier::VisitedSet;
pub use provider::GraphProvider;
pub use store::{Graph, GraphStats};
pub use types::{
    DfsStrategy, Direction, Edge, MstMethod, TopoMethod, TraversalOptions, TraversalOrder, Vertex,
    Visit, Weight, DEFAULT_MAX_RECURSION_DEPTH,
};
