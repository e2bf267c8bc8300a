use super::*;
use crate::graph::types::DEFAULT_MAX_RECURSION_DEPTH;
use crate::graph::Graph;

fn tree() -> Graph<u32> {
    let mut graph = Graph::directed();
    graph.add_edge(0, 1);
    graph.add_edge(0, 3);
    graph.add_edge(1, 2);
    graph.add_edge(3, 4);
    graph
}

fn diamond() -> Graph<&'static str> {
    let mut graph = Graph::directed();
    graph.add_edge("a", "b");
    graph.add_edge("a", "c");
    graph.add_edge("b", "d");
    graph.add_edge("c", "d");
    graph
}

#[test]
fn test_depth_first_order() {
    let order = visit_order(&tree(), &0, TraversalOrder::DepthFirst).unwrap();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_breadth_first_order() {
    let order = visit_order(&tree(), &0, TraversalOrder::BreadthFirst).unwrap();
    assert_eq!(order, vec![0, 1, 3, 2, 4]);
}

#[test]
fn test_recursive_matches_iterative() {
    let graph = diamond();
    let iterative = visit_order(&graph, &"a", TraversalOrder::DepthFirst).unwrap();
    let recursive = traverse_recursive(&graph, &"a", 100, |_| ())
        .unwrap()
        .into_order();
    assert_eq!(iterative, vec!["a", "b", "d", "c"]);
    assert_eq!(recursive, iterative);
}

#[test]
fn test_callback_fires_once_per_vertex() {
    let mut seen = Vec::new();
    let visited = traverse(&diamond(), &"a", TraversalOrder::BreadthFirst, |v| {
        seen.push(*v)
    })
    .unwrap();
    assert_eq!(seen, vec!["a", "b", "c", "d"]);
    assert_eq!(visited.order(), seen.as_slice());
}

#[test]
fn test_unreachable_vertices_excluded() {
    let mut graph = tree();
    graph.add_edge(9, 0);
    graph.add_vertex(7);
    let visited = traverse(&graph, &0, TraversalOrder::DepthFirst, |_| ()).unwrap();
    assert!(!visited.contains(&9));
    assert!(!visited.contains(&7));
    assert_eq!(visited.len(), 5);
}

#[test]
fn test_unknown_start_is_an_error() {
    let result = traverse(&tree(), &42, TraversalOrder::BreadthFirst, |_| ());
    assert!(matches!(result, Err(GraphError::UnknownVertex { .. })));
}

#[test]
fn test_early_exit_keeps_visited_consistent() {
    for order in [TraversalOrder::DepthFirst, TraversalOrder::BreadthFirst] {
        let mut calls = 0;
        let visited = traverse(&tree(), &0, order, |v| {
            calls += 1;
            *v != 1
        })
        .unwrap();
        assert!(visited.halted());
        assert!(visited.contains(&1));
        assert_eq!(visited.len(), calls);
        assert_eq!(visited.order().last(), Some(&1));
    }
}

#[test]
fn test_recursive_early_exit() {
    let visited = traverse_recursive(&tree(), &0, 10, |v| {
        if *v == 2 {
            Visit::Stop
        } else {
            Visit::Continue
        }
    })
    .unwrap();
    assert_eq!(visited.order(), &[0, 1, 2]);
    assert!(visited.halted());
}

#[test]
fn test_recursive_depth_limit() {
    let mut chain = Graph::directed();
    for i in 0..50u32 {
        chain.add_edge(i, i + 1);
    }
    let err = traverse_recursive(&chain, &0, 10, |_| ()).unwrap_err();
    assert!(matches!(err, GraphError::DepthLimitExceeded { limit: 10 }));

    let ok = traverse_recursive(&chain, &0, 50, |_| ()).unwrap();
    assert_eq!(ok.len(), 51);
}

fn chain(edges: u32) -> Graph<u32> {
    let mut graph = Graph::directed();
    for i in 0..edges {
        graph.add_edge(i, i + 1);
    }
    graph
}

#[test]
fn test_recursive_default_bound_fits_thread_stack() {
    let limit = DEFAULT_MAX_RECURSION_DEPTH;
    let deepest = chain(limit as u32);
    let visited = traverse_recursive(&deepest, &0, limit, |_| ()).unwrap();
    assert_eq!(visited.len(), limit + 1);

    let too_deep = chain(limit as u32 + 1);
    let err = traverse_recursive(&too_deep, &0, limit, |_| ()).unwrap_err();
    assert!(matches!(err, GraphError::DepthLimitExceeded { limit: l } if l == limit));
}

#[test]
fn test_default_options_recurse_to_bound() {
    let options = TraversalOptions {
        order: TraversalOrder::DepthFirst,
        strategy: DfsStrategy::Recursive,
        ..Default::default()
    };
    let visited =
        traverse_with_options(&chain(DEFAULT_MAX_RECURSION_DEPTH as u32), &0, &options, |_| ())
            .unwrap();
    assert_eq!(visited.len(), DEFAULT_MAX_RECURSION_DEPTH + 1);
}

#[test]
fn test_iterative_handles_deep_chain() {
    let mut chain = Graph::directed();
    for i in 0..100_000u32 {
        chain.add_edge(i, i + 1);
    }
    let visited = traverse(&chain, &0, TraversalOrder::DepthFirst, |_| ()).unwrap();
    assert_eq!(visited.len(), 100_001);
}

#[test]
fn test_cycle_is_visited_once() {
    let mut graph = Graph::directed();
    graph.add_edge('a', 'b');
    graph.add_edge('b', 'c');
    graph.add_edge('c', 'a');
    for order in [TraversalOrder::DepthFirst, TraversalOrder::BreadthFirst] {
        assert_eq!(visit_order(&graph, &'b', order).unwrap(), vec!['b', 'c', 'a']);
    }
}

#[test]
fn test_inbound_direction_walks_backwards() {
    let options = TraversalOptions::breadth_first().with_direction(Direction::In);
    let visited = traverse_with_options(&tree(), &4, &options, |_| ()).unwrap();
    assert_eq!(visited.order(), &[4, 3, 0]);
}

#[test]
fn test_both_directions_reach_weak_component() {
    let options = TraversalOptions::depth_first().with_direction(Direction::Both);
    let visited = traverse_with_options(&tree(), &2, &options, |_| ()).unwrap();
    assert_eq!(visited.order(), &[2, 1, 0, 3, 4]);
}

#[test]
fn test_threaded_visited_set_excludes_vertices() {
    let graph = diamond();
    let mut visited = VisitedSet::new();
    visited.insert("b");
    let outcome = traverse_with(
        &graph,
        &"a",
        &TraversalOptions::depth_first(),
        &mut visited,
        |_| (),
    )
    .unwrap();
    assert_eq!(outcome, Visit::Continue);
    assert_eq!(visited.order(), &["b", "a", "c", "d"]);
}

#[test]
fn test_threaded_visited_set_skips_explored_start() {
    let graph = tree();
    let mut visited = VisitedSet::new();
    let options = TraversalOptions::default();
    traverse_with(&graph, &1, &options, &mut visited, |_| ()).unwrap();
    let mut later = Vec::new();
    traverse_with(&graph, &2, &options, &mut visited, |v| later.push(*v)).unwrap();
    assert!(later.is_empty());
    assert_eq!(visited.order(), &[1, 2]);
}

#[test]
fn test_each_traversal_starts_fresh() {
    let graph = tree();
    let first = visit_order(&graph, &0, TraversalOrder::BreadthFirst).unwrap();
    let second = visit_order(&graph, &0, TraversalOrder::BreadthFirst).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_levels() {
    let layers = levels(&diamond(), &"a").unwrap();
    assert_eq!(layers, vec![vec!["a"], vec!["b", "c"], vec!["d"]]);
}

#[test]
fn test_hop_distances() {
    let hops = hop_distances(&tree(), &0).unwrap();
    assert_eq!(hops.len(), 5);
    assert_eq!(hops[&0], 0);
    assert_eq!(hops[&3], 1);
    assert_eq!(hops[&4], 2);
}

#[test]
fn test_undirected_traversal_uses_both_endpoints() {
    let mut graph = Graph::undirected();
    graph.add_edge(1, 2);
    graph.add_edge(3, 2);
    let order = visit_order(&graph, &3, TraversalOrder::BreadthFirst).unwrap();
    assert_eq!(order, vec![3, 2, 1]);
}
