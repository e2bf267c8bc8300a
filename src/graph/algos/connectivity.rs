//! Connectivity and cycle analysis

use crate::graph::algos::shared::colored_dfs;
use crate::graph::algos::traverse::explore;
use crate::graph::frontier::{Stack, VisitedSet};
use crate::graph::types::{Direction, Vertex, Visit};
use crate::graph::GraphProvider;
use serde::Serialize;
use std::collections::HashMap;

/// Weakly connected components, labeled `0..count` in discovery order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Components<V: Vertex> {
    #[serde(skip)]
    labels: HashMap<V, usize>,
    groups: Vec<Vec<V>>,
}

impl<V: Vertex> Components<V> {
    pub fn count(&self) -> usize {
        self.groups.len()
    }

    /// Component id of `vertex`, or `None` if it is not in the graph
    pub fn component_of(&self, vertex: &V) -> Option<usize> {
        self.labels.get(vertex).copied()
    }

    /// Members of each component, in traversal order
    pub fn groups(&self) -> &[Vec<V>] {
        &self.groups
    }

    pub fn same_component(&self, a: &V, b: &V) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Mapping from vertex to component id
    pub fn labels(&self) -> &HashMap<V, usize> {
        &self.labels
    }
}

/// Label every vertex with a component id.
///
/// Edges are followed in both directions, so a directed store is analyzed
/// over its undirected closure. Roots are taken in vertex insertion order
/// and one visited set is shared across all of them.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), directed = graph.is_directed()))]
pub fn connected_components<G: GraphProvider>(graph: &G) -> Components<G::Vertex> {
    let mut visited = VisitedSet::new();
    let mut labels = HashMap::with_capacity(graph.vertex_count());
    let mut groups: Vec<Vec<G::Vertex>> = Vec::new();

    for root in graph.vertices() {
        if visited.contains(root) {
            continue;
        }
        let id = groups.len();
        let mut members = Vec::new();
        explore(
            graph,
            root,
            Direction::Both,
            &mut Stack::default(),
            &mut visited,
            |vertex, _| {
                labels.insert(vertex.clone(), id);
                members.push(vertex.clone());
                Visit::Continue
            },
        );
        groups.push(members);
    }

    tracing::debug!(components = groups.len(), "components labeled");
    Components { labels, groups }
}

/// True when the graph has at most one weakly connected component
pub fn is_connected<G: GraphProvider>(graph: &G) -> bool {
    connected_components(graph).count() <= 1
}

/// One concrete cycle, first vertex repeated at the end.
///
/// Directed stores report a back edge to a vertex on the current DFS path.
/// Undirected stores ignore the edge straight back to the DFS parent, so a
/// single undirected edge is not a cycle but a self-loop is.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), directed = graph.is_directed()))]
pub fn find_cycle<G: GraphProvider>(graph: &G) -> Option<Vec<G::Vertex>> {
    let cycle = colored_dfs(graph, !graph.is_directed(), |_| {});
    if let Some(cycle) = &cycle {
        tracing::debug!(length = cycle.len() - 1, "cycle found");
    }
    cycle
}

pub fn has_cycle<G: GraphProvider>(graph: &G) -> bool {
    find_cycle(graph).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_single_component() {
        let mut graph = Graph::directed();
        graph.add_edge(0, 1);
        graph.add_edge(2, 1);
        let components = connected_components(&graph);
        assert_eq!(components.count(), 1);
        assert!(components.same_component(&0, &2));
        assert!(is_connected(&graph));
    }

    #[test]
    fn test_components_in_discovery_order() {
        let mut graph = Graph::undirected();
        graph.add_edge("a", "b");
        graph.add_edge("c", "d");
        graph.add_vertex("e");
        graph.add_edge("d", "f");

        let components = connected_components(&graph);
        assert_eq!(components.count(), 3);
        assert_eq!(components.component_of(&"a"), Some(0));
        assert_eq!(components.component_of(&"f"), Some(1));
        assert_eq!(components.component_of(&"e"), Some(2));
        assert_eq!(components.component_of(&"zz"), None);
        assert_eq!(components.groups()[1], vec!["c", "d", "f"]);
        assert!(!components.same_component(&"a", &"c"));
        assert!(!is_connected(&graph));
    }

    #[test]
    fn test_empty_graph_components() {
        let graph: Graph<u8> = Graph::directed();
        assert_eq!(connected_components(&graph).count(), 0);
        assert!(is_connected(&graph));
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_components_serialize_groups() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2);
        graph.add_vertex(3);
        let json = serde_json::to_value(connected_components(&graph)).unwrap();
        assert_eq!(json, serde_json::json!({"groups": [[1, 2], [3]]}));
    }

    #[test]
    fn test_directed_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge('x', 'a');
        graph.add_edge('a', 'b');
        graph.add_edge('b', 'c');
        graph.add_edge('c', 'a');
        assert_eq!(find_cycle(&graph), Some(vec!['a', 'b', 'c', 'a']));
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_directed_diamond_is_acyclic() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 4);
        graph.add_edge(3, 4);
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_directed_self_loop() {
        let mut graph = Graph::directed();
        graph.add_edge(5, 5);
        assert_eq!(find_cycle(&graph), Some(vec![5, 5]));
    }

    #[test]
    fn test_undirected_tree_is_acyclic() {
        let mut graph = Graph::undirected();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(2, 4);
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_undirected_triangle() {
        let mut graph = Graph::undirected();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 1);
        let cycle = find_cycle(&graph).unwrap();
        assert_eq!(cycle.len(), 4);
        assert_eq!(cycle.first(), cycle.last());
    }
}
