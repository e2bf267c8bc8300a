use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::algos::shared::check_non_negative;
use crate::graph::frontier::PriorityFrontier;
use crate::graph::types::{Vertex, Weight};
use crate::graph::GraphProvider;
use crate::trace_time;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Tentative distance and predecessor of one vertex
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PathEntry<V> {
    pub distance: Weight,
    pub predecessor: Option<V>,
}

impl<V> PathEntry<V> {
    fn unreachable() -> Self {
        PathEntry {
            distance: Weight::INFINITY,
            predecessor: None,
        }
    }
}

/// Single-source shortest-path tree
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    source: V,
    entries: HashMap<V, PathEntry<V>>,
    vertices: Vec<V>,
    settled: Vec<V>,
}

impl<V: Vertex> ShortestPaths<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Raw entry for `vertex`; unreachable vertices carry an infinite distance
    pub fn get(&self, vertex: &V) -> Option<&PathEntry<V>> {
        self.entries.get(vertex)
    }

    /// Distance from the source, or `None` if `vertex` is unreachable
    pub fn distance(&self, vertex: &V) -> Option<Weight> {
        self.get(vertex)
            .map(|entry| entry.distance)
            .filter(Weight::is_finite)
    }

    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.get(vertex).and_then(|entry| entry.predecessor.as_ref())
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Source-to-`vertex` path rebuilt from predecessors
    pub fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        if !self.is_reachable(vertex) {
            return None;
        }
        let mut path = vec![vertex.clone()];
        let mut current = vertex;
        while let Some(previous) = self.predecessor(current) {
            if path.len() > self.entries.len() {
                return None;
            }
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    /// Vertices in the order they were settled
    pub fn settled_order(&self) -> &[V] {
        &self.settled
    }

    /// Every vertex with its entry, in graph insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&V, &PathEntry<V>)> {
        self.vertices
            .iter()
            .filter_map(|vertex| self.entries.get(vertex).map(|entry| (vertex, entry)))
    }

    /// Finite distances, in graph insertion order
    pub fn distances(&self) -> Vec<(V, Weight)> {
        self.iter()
            .filter(|(_, entry)| entry.distance.is_finite())
            .map(|(vertex, entry)| (vertex.clone(), entry.distance))
            .collect()
    }
}

#[derive(serde::Serialize)]
struct Record<'a, V> {
    vertex: &'a V,
    distance: Option<f64>,
    predecessor: Option<&'a V>,
}

impl<V: Vertex + Serialize> Serialize for ShortestPaths<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let records: Vec<Record<'_, V>> = self
            .iter()
            .map(|(vertex, entry)| Record {
                vertex,
                distance: Some(entry.distance.value()).filter(|d| d.is_finite()),
                predecessor: entry.predecessor.as_ref(),
            })
            .collect();
        let mut state = serializer.serialize_struct("ShortestPaths", 2)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("entries", &records)?;
        state.end()
    }
}

/// A weighted path with its total distance
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WeightedPath<V> {
    pub vertices: Vec<V>,
    pub distance: Weight,
}

/// Dijkstra from `source`, stopping early once `target` is settled
fn solve<G: GraphProvider>(
    graph: &G,
    source: &G::Vertex,
    target: Option<&G::Vertex>,
) -> Result<ShortestPaths<G::Vertex>> {
    ensure_vertex!(graph, source);
    check_non_negative(graph)?;

    let start = Instant::now();
    let mut entries: HashMap<G::Vertex, PathEntry<G::Vertex>> = graph
        .vertices()
        .map(|vertex| (vertex.clone(), PathEntry::unreachable()))
        .collect();
    entries.insert(
        source.clone(),
        PathEntry {
            distance: Weight::ZERO,
            predecessor: None,
        },
    );

    let mut frontier = PriorityFrontier::new();
    frontier.push(source, Weight::ZERO);
    let mut settled: HashSet<&G::Vertex> = HashSet::new();
    let mut settled_order = Vec::new();

    while let Some((vertex, distance)) = frontier.pop() {
        if !settled.insert(vertex) {
            continue;
        }
        settled_order.push(vertex.clone());
        if target == Some(vertex) {
            break;
        }

        for edge in graph.neighbors(vertex) {
            if settled.contains(&edge.to) {
                continue;
            }
            let candidate = distance + edge.weight;
            let Some(entry) = entries.get_mut(&edge.to) else {
                continue;
            };
            if candidate.total_cmp(&entry.distance).is_lt() {
                tracing::trace!(from = ?vertex, to = ?edge.to, distance = %candidate, "relaxed");
                entry.distance = candidate;
                entry.predecessor = Some(vertex.clone());
                frontier.push(&edge.to, candidate);
            }
        }
    }

    trace_time!(start, "dijkstra", settled = settled_order.len());
    Ok(ShortestPaths {
        source: source.clone(),
        entries,
        vertices: graph.vertices().cloned().collect(),
        settled: settled_order,
    })
}

/// Shortest distances and predecessors from `source` to every vertex.
///
/// Fails with `NegativeWeight` before any relaxation if some edge weight is
/// negative or NaN. Ties in tentative distance are settled in the order
/// they entered the frontier.
#[tracing::instrument(skip(graph, source), fields(source = ?source, vertices = graph.vertex_count()))]
pub fn shortest_paths<G: GraphProvider>(
    graph: &G,
    source: &G::Vertex,
) -> Result<ShortestPaths<G::Vertex>> {
    let paths = solve(graph, source, None)?;
    tracing::debug!(
        settled = paths.settled_order().len(),
        "shortest paths computed"
    );
    Ok(paths)
}

/// Cheapest path from `src` to `dst`, or `None` if `dst` is unreachable
#[tracing::instrument(skip(graph, src, dst), fields(src = ?src, dst = ?dst))]
pub fn shortest_path<G: GraphProvider>(
    graph: &G,
    src: &G::Vertex,
    dst: &G::Vertex,
) -> Result<Option<WeightedPath<G::Vertex>>> {
    ensure_vertex!(graph, dst);
    let paths = solve(graph, src, Some(dst))?;
    let Some(distance) = paths.distance(dst) else {
        return Ok(None);
    };
    Ok(paths
        .path_to(dst)
        .map(|vertices| WeightedPath { vertices, distance }))
}
