//! Traversal engine
//!
//! One routine, [`explore`], drives every traversal; the frontier it is
//! given decides the order. Depth-first runs on a [`Stack`], breadth-first
//! on a [`Queue`].

use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::frontier::{Frontier, Queue, Stack, VisitedSet};
use crate::graph::types::{DfsStrategy, Direction, TraversalOptions, TraversalOrder, Visit};
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// Pending frontier item: a vertex and the vertex it was reached from
pub(crate) type Pending<V> = (V, Option<V>);

/// Generic frontier-driven exploration from `start`.
///
/// `on_discover` fires once per vertex as it becomes visited, with the
/// vertex it was reached from. Vertices already in `visited` are never
/// entered, so a threaded set confines the walk. Returns [`Visit::Stop`]
/// if the callback halted the walk.
pub(crate) fn explore<G, F>(
    graph: &G,
    start: &G::Vertex,
    direction: Direction,
    frontier: &mut F,
    visited: &mut VisitedSet<G::Vertex>,
    mut on_discover: impl FnMut(&G::Vertex, Option<&G::Vertex>) -> Visit,
) -> Visit
where
    G: GraphProvider,
    F: Frontier<Pending<G::Vertex>>,
{
    if visited.contains(start) {
        return Visit::Continue;
    }

    if F::MARKS_ON_PUSH {
        visited.insert(start.clone());
        if on_discover(start, None) == Visit::Stop {
            visited.mark_halted();
            return Visit::Stop;
        }
    }
    frontier.push((start.clone(), None));

    while let Some((vertex, parent)) = frontier.pop() {
        if !F::MARKS_ON_PUSH {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            if on_discover(&vertex, parent.as_ref()) == Visit::Stop {
                visited.mark_halted();
                return Visit::Stop;
            }
        }

        let mut batch = Vec::new();
        for next in graph.adjacent(&vertex, direction) {
            if visited.contains(next) {
                continue;
            }
            if F::MARKS_ON_PUSH {
                visited.insert(next.clone());
                if on_discover(next, Some(&vertex)) == Visit::Stop {
                    visited.mark_halted();
                    return Visit::Stop;
                }
            }
            batch.push((next.clone(), Some(vertex.clone())));
        }
        frontier.push_batch(batch);
    }

    Visit::Continue
}

/// Traverse from `start`, calling `visit` once per reachable vertex in
/// traversal order, and return the visited set.
///
/// `visit` may return `()` or a [`Visit`] (or `bool`, `false` meaning stop)
/// to end the walk early.
pub fn traverse<G, F, R>(
    graph: &G,
    start: &G::Vertex,
    order: TraversalOrder,
    visit: F,
) -> Result<VisitedSet<G::Vertex>>
where
    G: GraphProvider,
    F: FnMut(&G::Vertex) -> R,
    R: Into<Visit>,
{
    let options = TraversalOptions {
        order,
        ..Default::default()
    };
    traverse_with_options(graph, start, &options, visit)
}

/// [`traverse`] with explicit direction and depth-first strategy
pub fn traverse_with_options<G, F, R>(
    graph: &G,
    start: &G::Vertex,
    options: &TraversalOptions,
    visit: F,
) -> Result<VisitedSet<G::Vertex>>
where
    G: GraphProvider,
    F: FnMut(&G::Vertex) -> R,
    R: Into<Visit>,
{
    let mut visited = VisitedSet::new();
    traverse_with(graph, start, options, &mut visited, visit)?;
    Ok(visited)
}

/// Traverse into a caller-owned visited set.
///
/// Vertices already in `visited` are treated as explored: they are neither
/// reported nor expanded. Returns whether the visitor stopped the walk.
#[tracing::instrument(skip(graph, start, options, visited, visit), fields(start = ?start, order = %options.order, direction = %options.direction))]
pub fn traverse_with<G, F, R>(
    graph: &G,
    start: &G::Vertex,
    options: &TraversalOptions,
    visited: &mut VisitedSet<G::Vertex>,
    mut visit: F,
) -> Result<Visit>
where
    G: GraphProvider,
    F: FnMut(&G::Vertex) -> R,
    R: Into<Visit>,
{
    ensure_vertex!(graph, start);

    let before = visited.len();
    let mut callback = |vertex: &G::Vertex| -> Visit { visit(vertex).into() };
    let outcome = match (options.order, options.strategy) {
        (TraversalOrder::DepthFirst, DfsStrategy::Recursive) => {
            if visited.contains(start) {
                Visit::Continue
            } else {
                let limit = options.max_recursion_depth;
                let mut walk = Recursion {
                    graph,
                    direction: options.direction,
                    limit,
                    visited: &mut *visited,
                    visit: &mut callback,
                };
                walk.descend(start, 0)?
            }
        }
        (TraversalOrder::DepthFirst, DfsStrategy::Iterative) => explore(
            graph,
            start,
            options.direction,
            &mut Stack::default(),
            visited,
            |vertex, _| callback(vertex),
        ),
        (TraversalOrder::BreadthFirst, _) => explore(
            graph,
            start,
            options.direction,
            &mut Queue::default(),
            visited,
            |vertex, _| callback(vertex),
        ),
    };

    tracing::debug!(
        visited = visited.len() - before,
        halted = outcome == Visit::Stop,
        "traversal finished"
    );
    Ok(outcome)
}

/// Recursive depth-first traversal along outgoing edges.
///
/// Each neighbor's whole subtree is finished before its next sibling is
/// entered. Fails with `DepthLimitExceeded` once a vertex would sit more
/// than `max_depth` edges below `start`; use the iterative strategy for
/// graphs that deep.
pub fn traverse_recursive<G, F, R>(
    graph: &G,
    start: &G::Vertex,
    max_depth: usize,
    visit: F,
) -> Result<VisitedSet<G::Vertex>>
where
    G: GraphProvider,
    F: FnMut(&G::Vertex) -> R,
    R: Into<Visit>,
{
    let options = TraversalOptions {
        order: TraversalOrder::DepthFirst,
        strategy: DfsStrategy::Recursive,
        max_recursion_depth: max_depth,
        ..Default::default()
    };
    traverse_with_options(graph, start, &options, visit)
}

struct Recursion<'a, G: GraphProvider, F> {
    graph: &'a G,
    direction: Direction,
    limit: usize,
    visited: &'a mut VisitedSet<G::Vertex>,
    visit: &'a mut F,
}

impl<G, F> Recursion<'_, G, F>
where
    G: GraphProvider,
    F: FnMut(&G::Vertex) -> Visit,
{
    fn descend(&mut self, vertex: &G::Vertex, depth: usize) -> Result<Visit> {
        if depth > self.limit {
            return Err(GraphError::DepthLimitExceeded { limit: self.limit });
        }
        self.visited.insert(vertex.clone());
        if (self.visit)(vertex) == Visit::Stop {
            self.visited.mark_halted();
            return Ok(Visit::Stop);
        }

        let graph = self.graph;
        for next in graph.adjacent(vertex, self.direction) {
            if self.visited.contains(next) {
                continue;
            }
            if self.descend(next, depth + 1)? == Visit::Stop {
                return Ok(Visit::Stop);
            }
        }
        Ok(Visit::Continue)
    }
}

/// Vertices reachable from `start`, in traversal order
pub fn visit_order<G: GraphProvider>(
    graph: &G,
    start: &G::Vertex,
    order: TraversalOrder,
) -> Result<Vec<G::Vertex>> {
    Ok(traverse(graph, start, order, |_| ())?.into_order())
}

/// Breadth-first discovery order paired with hop counts from `start`
fn hop_counts<G: GraphProvider>(graph: &G, start: &G::Vertex) -> Result<Vec<(G::Vertex, usize)>> {
    ensure_vertex!(graph, start);

    let mut depth: HashMap<G::Vertex, usize> = HashMap::new();
    let mut discovered = Vec::new();
    explore(
        graph,
        start,
        Direction::Out,
        &mut Queue::default(),
        &mut VisitedSet::new(),
        |vertex, parent| {
            let hops = parent
                .and_then(|p| depth.get(p))
                .map_or(0, |parent_hops| parent_hops + 1);
            depth.insert(vertex.clone(), hops);
            discovered.push((vertex.clone(), hops));
            Visit::Continue
        },
    );
    Ok(discovered)
}

/// Breadth-first layers: `levels[k]` holds the vertices `k` edges from `start`
#[tracing::instrument(skip(graph, start), fields(start = ?start))]
pub fn levels<G: GraphProvider>(graph: &G, start: &G::Vertex) -> Result<Vec<Vec<G::Vertex>>> {
    let mut layers: Vec<Vec<G::Vertex>> = Vec::new();
    for (vertex, hops) in hop_counts(graph, start)? {
        if hops == layers.len() {
            layers.push(Vec::new());
        }
        if let Some(layer) = layers.get_mut(hops) {
            layer.push(vertex);
        }
    }
    tracing::debug!(depth = layers.len(), "levels computed");
    Ok(layers)
}

/// Fewest-edges distance from `start` to every reachable vertex
pub fn hop_distances<G: GraphProvider>(
    graph: &G,
    start: &G::Vertex,
) -> Result<HashMap<G::Vertex, usize>> {
    Ok(hop_counts(graph, start)?.into_iter().collect())
}

#[cfg(test)]
mod tests;
