//! Adjacency specifications
//!
//! The hand-off format between whatever produces a graph (demo data, a
//! crawler, a parsed file) and the [`Graph`](crate::graph::Graph) store.
//! Entry order is preserved when deserializing, because it becomes the
//! vertex registration order of the graph.

use crate::graph::types::Weight;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// One neighbor in an adjacency list
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum NeighborSpec<V> {
    /// `["B", 2.5]`
    Weighted(V, f64),
    /// `{"to": "B", "weight": 2.5}`
    Detailed {
        to: V,
        #[serde(default = "default_weight")]
        weight: f64,
    },
    /// `"B"`, weight 1
    Plain(V),
}

fn default_weight() -> f64 {
    Weight::DEFAULT.value()
}

impl<V> NeighborSpec<V> {
    pub(crate) fn from_edge(to: V, weight: Weight) -> Self {
        if weight == Weight::DEFAULT {
            NeighborSpec::Plain(to)
        } else {
            NeighborSpec::Weighted(to, weight.value())
        }
    }

    pub fn into_parts(self) -> (V, Weight) {
        match self {
            NeighborSpec::Weighted(to, weight) | NeighborSpec::Detailed { to, weight } => {
                (to, Weight::new(weight))
            }
            NeighborSpec::Plain(to) => (to, Weight::DEFAULT),
        }
    }
}

/// Ordered mapping from vertex to its neighbor list
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencySpec<V> {
    entries: Vec<(V, Vec<NeighborSpec<V>>)>,
}

impl<V> Default for AdjacencySpec<V> {
    fn default() -> Self {
        AdjacencySpec {
            entries: Vec::new(),
        }
    }
}

impl<V> AdjacencySpec<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex with its neighbors
    pub fn push(&mut self, vertex: V, neighbors: Vec<NeighborSpec<V>>) {
        self.entries.push((vertex, neighbors));
    }

    /// Builder form of [`push`](Self::push) for unweighted neighbors
    pub fn with(mut self, vertex: V, neighbors: impl IntoIterator<Item = V>) -> Self {
        let neighbors = neighbors.into_iter().map(NeighborSpec::Plain).collect();
        self.push(vertex, neighbors);
        self
    }

    /// Builder form of [`push`](Self::push) for weighted neighbors
    pub fn with_weighted(
        mut self,
        vertex: V,
        neighbors: impl IntoIterator<Item = (V, f64)>,
    ) -> Self {
        let neighbors = neighbors
            .into_iter()
            .map(|(to, weight)| NeighborSpec::Weighted(to, weight))
            .collect();
        self.push(vertex, neighbors);
        self
    }

    pub fn entries(&self) -> &[(V, Vec<NeighborSpec<V>>)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(V, Vec<NeighborSpec<V>>)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Serialize> Serialize for AdjacencySpec<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (vertex, neighbors) in &self.entries {
            map.serialize_entry(vertex, neighbors)?;
        }
        map.end()
    }
}

struct SpecVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for SpecVisitor<V> {
    type Value = AdjacencySpec<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from vertex to a list of neighbors")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((vertex, neighbors)) = map.next_entry::<V, Vec<NeighborSpec<V>>>()? {
            entries.push((vertex, neighbors));
        }
        Ok(AdjacencySpec { entries })
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for AdjacencySpec<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SpecVisitor(PhantomData))
    }
}
