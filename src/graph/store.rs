//! Insertion-ordered graph store
//!
//! Vertices keep the order in which they were first registered, and each
//! vertex keeps its outgoing edges in insertion order. Both orders are part
//! of the contract: they decide tie-breaks in every algorithm.

use crate::graph::adjacency::{AdjacencySpec, NeighborSpec};
use crate::graph::types::{Edge, Vertex, Weight};
use crate::graph::GraphProvider;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Slot<V> {
    vertex: V,
    outbound: Vec<Edge<V>>,
    inbound: Vec<Edge<V>>,
}

impl<V> Slot<V> {
    fn new(vertex: V) -> Self {
        Slot {
            vertex,
            outbound: Vec::new(),
            inbound: Vec::new(),
        }
    }
}

/// Directed or undirected graph over vertices of type `V`.
///
/// An undirected graph stores every edge as a symmetric pair of directed
/// edges; a self-loop is stored once.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    directed: bool,
    index: HashMap<V, usize>,
    slots: Vec<Slot<V>>,
}

/// Summary counts for a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub directed: bool,
    pub vertices: usize,
    pub edges: usize,
    pub isolated: usize,
    pub self_loops: usize,
    pub max_out_degree: usize,
    pub density: f64,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Graph::directed()
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            index: HashMap::new(),
            slots: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Build a graph from an adjacency specification.
    ///
    /// Every key is registered first, in specification order, so vertices
    /// that only appear as neighbors come after all keys.
    pub fn from_adjacency(directed: bool, spec: AdjacencySpec<V>) -> Self {
        let mut graph = Graph::new(directed);
        for (vertex, _) in spec.entries() {
            graph.add_vertex(vertex.clone());
        }
        for (vertex, neighbors) in spec.into_entries() {
            for neighbor in neighbors {
                let (to, weight) = neighbor.into_parts();
                graph.add_weighted_edge(vertex.clone(), to, weight);
            }
        }
        graph
    }

    /// Parse a JSON adjacency object such as `{"A": ["B", ["C", 2.5]]}`
    pub fn from_json_str(directed: bool, json: &str) -> crate::error::Result<Self>
    where
        V: serde::de::DeserializeOwned,
    {
        let spec: AdjacencySpec<V> = serde_json::from_str(json)?;
        Ok(Self::from_adjacency(directed, spec))
    }

    /// Export the graph as an adjacency specification (unit weights are
    /// written as bare neighbors)
    pub fn to_adjacency(&self) -> AdjacencySpec<V> {
        let mut spec = AdjacencySpec::new();
        for slot in &self.slots {
            let neighbors = slot
                .outbound
                .iter()
                .map(|edge| NeighborSpec::from_edge(edge.to.clone(), edge.weight))
                .collect();
            spec.push(slot.vertex.clone(), neighbors);
        }
        spec
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Register a vertex; returns false if it was already present
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.slots.len());
        self.slots.push(Slot::new(vertex));
        true
    }

    /// Add an edge with the default weight
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        self.add_weighted_edge(from, to, Weight::DEFAULT)
    }

    /// Add a weighted edge, registering both endpoints if absent.
    ///
    /// Returns false when the edge already existed; its weight is updated
    /// in place and its position in the adjacency order is kept.
    pub fn add_weighted_edge(&mut self, from: V, to: V, weight: impl Into<Weight>) -> bool {
        let weight = weight.into();
        let added = self.insert_directed(&from, &to, weight);
        if !self.directed && from != to {
            self.insert_directed(&to, &from, weight);
        }
        added
    }

    fn ensure_slot(&mut self, vertex: &V) -> usize {
        if let Some(&pos) = self.index.get(vertex) {
            return pos;
        }
        self.add_vertex(vertex.clone());
        self.slots.len() - 1
    }

    fn insert_directed(&mut self, from: &V, to: &V, weight: Weight) -> bool {
        let from_pos = self.ensure_slot(from);
        let to_pos = self.ensure_slot(to);

        if let Some(existing) = self.slots[from_pos]
            .outbound
            .iter_mut()
            .find(|e| &e.to == to)
        {
            existing.weight = weight;
            if let Some(back) = self.slots[to_pos]
                .inbound
                .iter_mut()
                .find(|e| &e.from == from)
            {
                back.weight = weight;
            }
            return false;
        }

        let edge = Edge::new(from.clone(), to.clone(), weight);
        self.slots[to_pos].inbound.push(edge.clone());
        self.slots[from_pos].outbound.push(edge);
        true
    }

    fn remove_directed(&mut self, from: &V, to: &V) -> bool {
        let (Some(&from_pos), Some(&to_pos)) = (self.index.get(from), self.index.get(to)) else {
            return false;
        };
        let outbound = &mut self.slots[from_pos].outbound;
        let before = outbound.len();
        outbound.retain(|e| &e.to != to);
        let removed = outbound.len() != before;
        self.slots[to_pos].inbound.retain(|e| &e.from != from);
        removed
    }

    /// Remove an edge (both directions for an undirected graph)
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let removed = self.remove_directed(from, to);
        if !self.directed && from != to {
            self.remove_directed(to, from);
        }
        removed
    }

    /// Remove a vertex together with every incident edge
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(pos) = self.index.remove(vertex) else {
            return false;
        };
        self.slots.remove(pos);
        for slot in &mut self.slots {
            slot.outbound.retain(|e| &e.to != vertex);
            slot.inbound.retain(|e| &e.from != vertex);
        }
        for position in self.index.values_mut() {
            if *position > pos {
                *position -= 1;
            }
        }
        true
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }

    pub fn edge_weight(&self, from: &V, to: &V) -> Option<Weight> {
        self.outbound(from)
            .iter()
            .find(|e| &e.to == to)
            .map(|e| e.weight)
    }

    /// Outgoing edges in insertion order; empty for an unknown vertex
    pub fn outbound(&self, vertex: &V) -> &[Edge<V>] {
        match self.index.get(vertex) {
            Some(&pos) => &self.slots[pos].outbound,
            None => &[],
        }
    }

    /// Edges pointing at `vertex`, in insertion order; empty for an unknown vertex
    pub fn inbound(&self, vertex: &V) -> &[Edge<V>] {
        match self.index.get(vertex) {
            Some(&pos) => &self.slots[pos].inbound,
            None => &[],
        }
    }

    /// Neighbor vertices with edge weights, in insertion order
    pub fn neighbors(&self, vertex: &V) -> impl Iterator<Item = (&V, Weight)> {
        self.outbound(vertex).iter().map(|e| (&e.to, e.weight))
    }

    pub fn out_degree(&self, vertex: &V) -> usize {
        self.outbound(vertex).len()
    }

    pub fn in_degree(&self, vertex: &V) -> usize {
        self.inbound(vertex).len()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.slots.iter().map(|slot| &slot.vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn self_loop_count(&self) -> usize {
        self.slots
            .iter()
            .flat_map(|slot| slot.outbound.iter())
            .filter(|e| e.is_self_loop())
            .count()
    }

    /// Number of edges; an undirected pair counts once
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.slots.iter().map(|slot| slot.outbound.len()).sum();
        if self.directed {
            stored
        } else {
            let loops = self.self_loop_count();
            (stored - loops) / 2 + loops
        }
    }

    /// Every edge once, grouped by source vertex in insertion order.
    /// For an undirected graph each pair is reported from the endpoint
    /// registered first.
    pub fn edges(&self) -> Vec<Edge<V>> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (pos, slot) in self.slots.iter().enumerate() {
            for edge in &slot.outbound {
                let keep = self.directed || self.index.get(&edge.to).is_some_and(|&to| to >= pos);
                if keep {
                    edges.push(edge.clone());
                }
            }
        }
        edges
    }

    pub fn stats(&self) -> GraphStats {
        let vertices = self.vertex_count();
        let edges = self.edge_count();
        let isolated = self
            .slots
            .iter()
            .filter(|slot| slot.outbound.is_empty() && slot.inbound.is_empty())
            .count();
        let max_out_degree = self
            .slots
            .iter()
            .map(|slot| slot.outbound.len())
            .max()
            .unwrap_or(0);
        let density = if vertices < 2 {
            0.0
        } else {
            let possible = (vertices * (vertices - 1)) as f64;
            let factor = if self.directed { 1.0 } else { 2.0 };
            factor * edges as f64 / possible
        };

        GraphStats {
            directed: self.directed,
            vertices,
            edges,
            isolated,
            self_loops: self.self_loop_count(),
            max_out_degree,
            density,
        }
    }
}

impl<V: Vertex> GraphProvider for Graph<V> {
    type Vertex = V;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn contains(&self, vertex: &V) -> bool {
        Graph::contains(self, vertex)
    }

    fn vertices(&self) -> impl Iterator<Item = &V> {
        Graph::vertices(self)
    }

    fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    fn neighbors(&self, vertex: &V) -> &[Edge<V>] {
        self.outbound(vertex)
    }

    fn inbound(&self, vertex: &V) -> &[Edge<V>] {
        Graph::inbound(self, vertex)
    }
}

impl<V: Vertex> FromIterator<Edge<V>> for Graph<V> {
    /// Collect edges into a directed graph
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(iter: I) -> Self {
        let mut graph = Graph::directed();
        graph.extend(iter);
        graph
    }
}

impl<V: Vertex> Extend<Edge<V>> for Graph<V> {
    fn extend<I: IntoIterator<Item = Edge<V>>>(&mut self, iter: I) {
        for edge in iter {
            self.add_weighted_edge(edge.from, edge.to, edge.weight);
        }
    }
}
