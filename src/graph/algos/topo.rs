use crate::error::{GraphError, Result};
use crate::graph::algos::shared::colored_dfs;
use crate::graph::frontier::{Frontier, Queue};
use crate::graph::types::TopoMethod;
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// Order vertices so every edge points forward, using Kahn's algorithm
pub fn topological_sort<G: GraphProvider>(graph: &G) -> Result<Vec<G::Vertex>> {
    topological_sort_with(graph, TopoMethod::default())
}

/// Topological sort with an explicit method.
///
/// Fails with a `Cycle` error naming one concrete cycle; no partial order is
/// returned. In an undirected store every edge is a two-vertex cycle.
#[tracing::instrument(skip(graph, method), fields(vertices = graph.vertex_count(), method = %method))]
pub fn topological_sort_with<G: GraphProvider>(
    graph: &G,
    method: TopoMethod,
) -> Result<Vec<G::Vertex>> {
    let order = match method {
        TopoMethod::Kahn => kahn(graph)?,
        TopoMethod::DepthFirst => depth_first(graph)?,
    };
    tracing::debug!(ordered = order.len(), "topological order computed");
    Ok(order)
}

fn kahn<G: GraphProvider>(graph: &G) -> Result<Vec<G::Vertex>> {
    let mut in_degree: HashMap<&G::Vertex, usize> =
        graph.vertices().map(|vertex| (vertex, 0)).collect();
    for vertex in graph.vertices() {
        for edge in graph.neighbors(vertex) {
            *in_degree.entry(&edge.to).or_insert(0) += 1;
        }
    }

    let mut ready = Queue::default();
    for vertex in graph.vertices() {
        if in_degree.get(vertex) == Some(&0) {
            ready.push(vertex);
        }
    }

    let mut order = Vec::with_capacity(graph.vertex_count());
    while let Some(vertex) = ready.pop() {
        order.push(vertex.clone());
        for edge in graph.neighbors(vertex) {
            if let Some(degree) = in_degree.get_mut(&edge.to) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push(&edge.to);
                }
            }
        }
    }

    if order.len() < graph.vertex_count() {
        let cycle = colored_dfs(graph, false, |_| {}).unwrap_or_default();
        return Err(GraphError::cycle(&cycle));
    }
    Ok(order)
}

fn depth_first<G: GraphProvider>(graph: &G) -> Result<Vec<G::Vertex>> {
    let mut finished = Vec::with_capacity(graph.vertex_count());
    if let Some(cycle) = colored_dfs(graph, false, |vertex| finished.push(vertex.clone())) {
        return Err(GraphError::cycle(&cycle));
    }
    finished.reverse();
    Ok(finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn is_topological(graph: &Graph<&str>, order: &[&str]) -> bool {
        let position: HashMap<&str, usize> =
            order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        graph
            .edges()
            .iter()
            .all(|edge| position[edge.from] < position[edge.to])
    }

    fn build_plan() -> Graph<&'static str> {
        let mut graph = Graph::directed();
        graph.add_edge("fetch", "compile");
        graph.add_edge("configure", "compile");
        graph.add_edge("compile", "test");
        graph.add_edge("compile", "package");
        graph.add_edge("test", "package");
        graph
    }

    #[test]
    fn test_kahn_order() {
        let order = topological_sort(&build_plan()).unwrap();
        assert_eq!(order, vec!["fetch", "configure", "compile", "test", "package"]);
    }

    #[test]
    fn test_depth_first_order_is_valid() {
        let graph = build_plan();
        let order = topological_sort_with(&graph, TopoMethod::DepthFirst).unwrap();
        assert_eq!(order.len(), 5);
        assert!(is_topological(&graph, &order));
        assert_eq!(order, vec!["configure", "fetch", "compile", "test", "package"]);
    }

    #[test]
    fn test_cycle_rejected_by_both_methods() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");
        for method in [TopoMethod::Kahn, TopoMethod::DepthFirst] {
            match topological_sort_with(&graph, method) {
                Err(GraphError::Cycle { cycle }) => {
                    assert_eq!(cycle, vec!["A", "B", "C", "A"]);
                }
                other => panic!("expected cycle error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2);
        graph.add_edge(2, 2);
        assert!(matches!(
            topological_sort(&graph),
            Err(GraphError::Cycle { .. })
        ));
    }

    #[test]
    fn test_isolated_and_empty() {
        let mut graph: Graph<u8> = Graph::directed();
        assert!(topological_sort(&graph).unwrap().is_empty());
        graph.add_vertex(3);
        graph.add_vertex(1);
        assert_eq!(topological_sort(&graph).unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_undirected_edge_is_a_cycle() {
        let mut graph = Graph::undirected();
        graph.add_edge('p', 'q');
        let err = topological_sort(&graph).unwrap_err();
        assert!(matches!(err, GraphError::Cycle { .. }));
    }
}
