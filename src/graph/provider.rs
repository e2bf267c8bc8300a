use crate::graph::types::{Direction, Edge, Vertex};

/// Read-only adjacency access consumed by every algorithm.
///
/// Implementations must report vertices and edges in a stable insertion
/// order, and return an empty slice (never fail) for unknown vertices.
pub trait GraphProvider {
    type Vertex: Vertex;

    fn is_directed(&self) -> bool;
    fn contains(&self, vertex: &Self::Vertex) -> bool;
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex>;
    fn vertex_count(&self) -> usize;
    fn neighbors(&self, vertex: &Self::Vertex) -> &[Edge<Self::Vertex>];
    fn inbound(&self, vertex: &Self::Vertex) -> &[Edge<Self::Vertex>];

    /// Vertices one step away along `direction`.
    ///
    /// `Both` lists outgoing targets first, then incoming sources, each in
    /// insertion order. For an undirected graph all three directions are
    /// the same adjacency.
    fn adjacent(&self, vertex: &Self::Vertex, direction: Direction) -> Vec<&Self::Vertex> {
        let outbound = self.neighbors(vertex).iter().map(|e| &e.to);
        if !self.is_directed() {
            return outbound.collect();
        }
        let inbound = self.inbound(vertex).iter().map(|e| &e.from);
        match direction {
            Direction::Out => outbound.collect(),
            Direction::In => inbound.collect(),
            Direction::Both => outbound.chain(inbound).collect(),
        }
    }
}
