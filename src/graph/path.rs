//! Path reconstruction utilities for graph traversal

use crate::graph::types::Vertex;
use std::collections::HashMap;

/// Walk a predecessor map from `to` back to `from`.
///
/// Returns the path in forward order, or `None` when the chain breaks
/// before reaching `from`. A chain longer than the map itself can only be a
/// loop and is reported as `None` too.
pub fn reconstruct_path<V: Vertex>(
    from: &V,
    to: &V,
    predecessors: &HashMap<V, V>,
) -> Option<Vec<V>> {
    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        if path.len() > predecessors.len() {
            return None;
        }
        current = predecessors.get(current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}
