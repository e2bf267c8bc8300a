pub mod connectivity;
pub mod dijkstra;
pub mod mst;
pub mod paths;
pub(crate) mod shared;
pub mod topo;
pub mod traverse;

pub use connectivity::{connected_components, find_cycle, has_cycle, is_connected, Components};
pub use dijkstra::{shortest_path, shortest_paths, PathEntry, ShortestPaths, WeightedPath};
pub use mst::{minimum_spanning_tree, minimum_spanning_tree_with, SpanningForest};
pub use paths::{all_simple_paths, find_path, shortest_hop_path};
pub use topo::{topological_sort, topological_sort_with};
pub use traverse::{
    hop_distances, levels, traverse, traverse_recursive, traverse_with, traverse_with_options,
    visit_order,
};
