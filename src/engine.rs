//! Configured entry points
//!
//! [`Engine`] pairs a graph with an [`EngineConfig`] so callers that load
//! their defaults from a file do not have to thread methods and options
//! through every call. Each method forwards to the matching free function.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::graph::algos;
use crate::graph::{
    Components, GraphProvider, ShortestPaths, SpanningForest, VisitedSet, Visit, WeightedPath,
};

pub struct Engine<'g, G: GraphProvider> {
    graph: &'g G,
    config: EngineConfig,
}

impl<'g, G: GraphProvider> Engine<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, EngineConfig::default())
    }

    pub fn with_config(graph: &'g G, config: EngineConfig) -> Self {
        Engine { graph, config }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Traverse with the configured order, direction and strategy
    pub fn traverse<F, R>(&self, start: &G::Vertex, visit: F) -> Result<VisitedSet<G::Vertex>>
    where
        F: FnMut(&G::Vertex) -> R,
        R: Into<Visit>,
    {
        let options = self.config.traversal_options();
        algos::traverse_with_options(self.graph, start, &options, visit)
    }

    pub fn visit_order(&self, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
        Ok(self.traverse(start, |_| ())?.into_order())
    }

    pub fn find_path(&self, src: &G::Vertex, dst: &G::Vertex) -> Result<Option<Vec<G::Vertex>>> {
        algos::find_path(self.graph, src, dst)
    }

    pub fn connected_components(&self) -> Components<G::Vertex> {
        algos::connected_components(self.graph)
    }

    pub fn has_cycle(&self) -> bool {
        algos::has_cycle(self.graph)
    }

    pub fn shortest_paths(&self, source: &G::Vertex) -> Result<ShortestPaths<G::Vertex>> {
        algos::shortest_paths(self.graph, source)
    }

    pub fn shortest_path(
        &self,
        src: &G::Vertex,
        dst: &G::Vertex,
    ) -> Result<Option<WeightedPath<G::Vertex>>> {
        algos::shortest_path(self.graph, src, dst)
    }

    /// Topological sort with the configured method
    pub fn topological_sort(&self) -> Result<Vec<G::Vertex>> {
        algos::topological_sort_with(self.graph, self.config.ordering.topo_method)
    }

    /// Minimum spanning forest with the configured method
    pub fn minimum_spanning_tree(&self) -> Result<SpanningForest<G::Vertex>> {
        algos::minimum_spanning_tree_with(self.graph, self.config.spanning.mst_method)
    }
}
