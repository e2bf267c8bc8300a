use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::algos::traverse::{explore, Pending};
use crate::graph::frontier::{Frontier, Queue, Stack, VisitedSet};
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Direction, Visit};
use crate::graph::GraphProvider;
use std::collections::{HashMap, HashSet};

/// Walk outgoing edges from `src` with the given frontier, recording parent
/// pointers, until `dst` is discovered.
fn search<G, F>(
    graph: &G,
    src: &G::Vertex,
    dst: &G::Vertex,
    mut frontier: F,
) -> Result<Option<Vec<G::Vertex>>>
where
    G: GraphProvider,
    F: Frontier<Pending<G::Vertex>>,
{
    ensure_vertex!(graph, src);
    ensure_vertex!(graph, dst);

    let mut parents: HashMap<G::Vertex, G::Vertex> = HashMap::new();
    let mut visited = VisitedSet::new();
    explore(
        graph,
        src,
        Direction::Out,
        &mut frontier,
        &mut visited,
        |vertex, parent| {
            if let Some(parent) = parent {
                parents.insert(vertex.clone(), parent.clone());
            }
            Visit::from(vertex != dst)
        },
    );

    if !visited.contains(dst) {
        return Ok(None);
    }
    Ok(reconstruct_path(src, dst, &parents))
}

/// Some path from `src` to `dst`, found by depth-first search.
///
/// The path is not necessarily the shortest. `src == dst` yields `[src]`.
#[tracing::instrument(skip(graph, src, dst), fields(src = ?src, dst = ?dst))]
pub fn find_path<G: GraphProvider>(
    graph: &G,
    src: &G::Vertex,
    dst: &G::Vertex,
) -> Result<Option<Vec<G::Vertex>>> {
    search(graph, src, dst, Stack::default())
}

/// Path from `src` to `dst` with the fewest edges, found by breadth-first search
#[tracing::instrument(skip(graph, src, dst), fields(src = ?src, dst = ?dst))]
pub fn shortest_hop_path<G: GraphProvider>(
    graph: &G,
    src: &G::Vertex,
    dst: &G::Vertex,
) -> Result<Option<Vec<G::Vertex>>> {
    search(graph, src, dst, Queue::default())
}

/// Every simple path from `src` to `dst`, in depth-first discovery order.
///
/// The number of simple paths can grow exponentially with graph size.
#[tracing::instrument(skip(graph, src, dst), fields(src = ?src, dst = ?dst))]
pub fn all_simple_paths<G: GraphProvider>(
    graph: &G,
    src: &G::Vertex,
    dst: &G::Vertex,
) -> Result<Vec<Vec<G::Vertex>>> {
    ensure_vertex!(graph, src);
    ensure_vertex!(graph, dst);

    if src == dst {
        return Ok(vec![vec![src.clone()]]);
    }

    let mut paths = Vec::new();
    let mut path = vec![src];
    let mut on_path: HashSet<&G::Vertex> = HashSet::from([src]);
    let mut pending = vec![graph.neighbors(src).iter()];

    while let Some(edges) = pending.last_mut() {
        let Some(edge) = edges.next() else {
            pending.pop();
            if let Some(done) = path.pop() {
                on_path.remove(done);
            }
            continue;
        };

        let next = &edge.to;
        if next == dst {
            let mut found: Vec<G::Vertex> = path.iter().map(|v| (*v).clone()).collect();
            found.push(dst.clone());
            paths.push(found);
        } else if on_path.insert(next) {
            path.push(next);
            pending.push(graph.neighbors(next).iter());
        }
    }

    tracing::debug!(paths = paths.len(), "simple paths enumerated");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::Graph;

    fn sample() -> Graph<&'static str> {
        let mut graph = Graph::directed();
        graph.add_edge("a", "b");
        graph.add_edge("a", "c");
        graph.add_edge("b", "d");
        graph.add_edge("c", "d");
        graph.add_edge("d", "e");
        graph.add_edge("a", "e");
        graph
    }

    #[test]
    fn test_find_path_follows_first_branch() {
        let path = find_path(&sample(), &"a", &"e").unwrap().unwrap();
        assert_eq!(path, vec!["a", "b", "d", "e"]);
    }

    #[test]
    fn test_shortest_hop_path() {
        let path = shortest_hop_path(&sample(), &"a", &"e").unwrap().unwrap();
        assert_eq!(path, vec!["a", "e"]);
    }

    #[test]
    fn test_path_to_self() {
        assert_eq!(find_path(&sample(), &"c", &"c").unwrap(), Some(vec!["c"]));
    }

    #[test]
    fn test_no_path_against_edge_direction() {
        assert_eq!(find_path(&sample(), &"e", &"a").unwrap(), None);
        assert_eq!(shortest_hop_path(&sample(), &"d", &"b").unwrap(), None);
    }

    #[test]
    fn test_unknown_endpoint() {
        let err = find_path(&sample(), &"a", &"zz").unwrap_err();
        assert!(matches!(err, GraphError::UnknownVertex { .. }));
    }

    #[test]
    fn test_all_simple_paths() {
        let paths = all_simple_paths(&sample(), &"a", &"e").unwrap();
        assert_eq!(
            paths,
            vec![
                vec!["a", "b", "d", "e"],
                vec!["a", "c", "d", "e"],
                vec!["a", "e"],
            ]
        );
    }

    #[test]
    fn test_all_simple_paths_ignores_cycles() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);
        graph.add_edge(2, 3);
        let paths = all_simple_paths(&graph, &1, &3).unwrap();
        assert_eq!(paths, vec![vec![1, 2, 3]]);
    }
}
