//! Minimum spanning forests over undirected stores

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::check_non_negative;
use crate::graph::disjoint_set::DisjointSet;
use crate::graph::frontier::PriorityFrontier;
use crate::graph::types::{Edge, MstMethod, Vertex, Weight};
use crate::graph::GraphProvider;
use crate::trace_time;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Minimum spanning forest.
///
/// A disconnected graph yields one tree per component; check
/// `component_count` (or [`is_tree`](Self::is_tree)) when a single tree was
/// expected. Edge orientation within the forest is not significant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningForest<V: Vertex> {
    pub edges: Vec<Edge<V>>,
    pub total_weight: Weight,
    pub component_count: usize,
}

impl<V: Vertex> SpanningForest<V> {
    fn new(edges: Vec<Edge<V>>, component_count: usize) -> Self {
        let total_weight = edges.iter().map(|edge| edge.weight).sum();
        SpanningForest {
            edges,
            total_weight,
            component_count,
        }
    }

    /// True when the forest is a single tree spanning the whole graph
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Minimum spanning forest using Kruskal's algorithm
pub fn minimum_spanning_tree<G: GraphProvider>(graph: &G) -> Result<SpanningForest<G::Vertex>> {
    minimum_spanning_tree_with(graph, MstMethod::default())
}

/// Minimum spanning forest with an explicit method.
///
/// Requires an undirected store with non-negative weights. Ties between
/// equal weights are broken by edge insertion order.
#[tracing::instrument(skip(graph, method), fields(vertices = graph.vertex_count(), method = %method))]
pub fn minimum_spanning_tree_with<G: GraphProvider>(
    graph: &G,
    method: MstMethod,
) -> Result<SpanningForest<G::Vertex>> {
    if graph.is_directed() {
        return Err(GraphError::directed_graph("minimum spanning tree"));
    }
    check_non_negative(graph)?;

    let start = Instant::now();
    let forest = match method {
        MstMethod::Kruskal => kruskal(graph),
        MstMethod::Prim => prim(graph),
    };
    trace_time!(start, "spanning_forest", edges = forest.len());

    if forest.component_count > 1 {
        tracing::debug!(
            components = forest.component_count,
            "graph is disconnected, returning a spanning forest"
        );
    }
    Ok(forest)
}

fn kruskal<G: GraphProvider>(graph: &G) -> SpanningForest<G::Vertex> {
    let index: HashMap<&G::Vertex, usize> = graph
        .vertices()
        .enumerate()
        .map(|(i, vertex)| (vertex, i))
        .collect();

    // Each undirected pair once, from its earlier-registered endpoint
    let mut candidates: Vec<(usize, usize, &Edge<G::Vertex>)> = Vec::new();
    for (from, vertex) in graph.vertices().enumerate() {
        for edge in graph.neighbors(vertex) {
            if let Some(&to) = index.get(&edge.to) {
                if to > from {
                    candidates.push((from, to, edge));
                }
            }
        }
    }
    candidates.sort_by(|a, b| a.2.weight.total_cmp(&b.2.weight));

    let mut sets = DisjointSet::new(index.len());
    let mut edges = Vec::new();
    for (from, to, edge) in candidates {
        if sets.union(from, to) {
            tracing::trace!(from = ?edge.from, to = ?edge.to, weight = %edge.weight, "edge joined");
            edges.push(edge.clone());
        }
    }

    SpanningForest::new(edges, sets.set_count())
}

fn prim<G: GraphProvider>(graph: &G) -> SpanningForest<G::Vertex> {
    let mut in_tree: HashSet<&G::Vertex> = HashSet::with_capacity(graph.vertex_count());
    let mut edges = Vec::new();
    let mut roots = 0;

    for root in graph.vertices() {
        if !in_tree.insert(root) {
            continue;
        }
        roots += 1;

        let mut crossing = PriorityFrontier::new();
        for edge in graph.neighbors(root) {
            crossing.push(edge, edge.weight);
        }
        while let Some((edge, _)) = crossing.pop() {
            if !in_tree.insert(&edge.to) {
                continue;
            }
            tracing::trace!(from = ?edge.from, to = ?edge.to, weight = %edge.weight, "edge joined");
            edges.push(edge.clone());
            for next in graph.neighbors(&edge.to) {
                if !in_tree.contains(&next.to) {
                    crossing.push(next, next.weight);
                }
            }
        }
    }

    SpanningForest::new(edges, roots)
}
