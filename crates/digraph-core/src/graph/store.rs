use std::collections::HashMap;
use std::fmt;

use indexmap::IndexSet;

use crate::config::{GraphConfig, RemovalPolicy};
use crate::error::{GraphError, Result};
use crate::graph::storage::{AdjacencyMap, EdgeCollection, InsertionOrder, StorageBuilder};
use crate::graph::types::{Color, Edge, Vertex};

/// Directed multigraph over caller-supplied vertex and edge types.
///
/// The adjacency map (vertex → outgoing edges) is the only storage; the edge
/// set of the graph is the union of all adjacency lists. Vertex and edge
/// iteration follow the order chosen by the storage builder `B`.
///
/// Every structural mutation bumps [`Graph::generation`], which traversal
/// walkers use to detect that the graph changed underneath them.
pub struct Graph<E: Edge, B: StorageBuilder<E> = InsertionOrder> {
    builder: B,
    adjacency: B::Map,
    removal_policy: RemovalPolicy,
    generation: u64,
}

impl<E: Edge> Graph<E, InsertionOrder> {
    /// Create an empty graph with insertion-ordered storage
    pub fn new() -> Self {
        Self::with_builder(InsertionOrder)
    }
}

impl<E: Edge> Default for Graph<E, InsertionOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Edge, B: StorageBuilder<E>> Graph<E, B> {
    /// Create an empty graph whose containers come from `builder`
    pub fn with_builder(builder: B) -> Self {
        let adjacency = builder.new_map();
        Self {
            builder,
            adjacency,
            removal_policy: RemovalPolicy::default(),
            generation: 0,
        }
    }

    /// Create an empty graph configured by `config`
    pub fn with_config(builder: B, config: &GraphConfig) -> Self {
        let mut graph = Self::with_builder(builder);
        graph.removal_policy = config.removal_policy();
        graph
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    /// Counter bumped by every mutation that changed the graph
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Add a vertex. Adding a vertex already present is a no-op.
    pub fn add_vertex(&mut self, vertex: E::Vertex) -> Result<()> {
        if vertex.is_null() {
            return Err(GraphError::null_vertex());
        }
        if self.insert_vertex(vertex) {
            self.generation += 1;
        }
        Ok(())
    }

    /// Add an edge, adding its endpoints if missing.
    ///
    /// Edges are compared by value: adding an edge equal to one already
    /// present is a no-op. Distinct edges between the same pair are kept.
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        if edge.is_null() {
            return Err(GraphError::null_edge());
        }

        // Endpoints first: a retained edge may point at a removed vertex
        let added_source = self.insert_vertex(edge.source().clone());
        let added_destination = self.insert_vertex(edge.destination().clone());
        let mut changed = added_source || added_destination;
        if self.contains_edge(&edge) {
            tracing::trace!(edge = ?edge, "edge already present");
        } else if let Some(edges) = self.adjacency.get_mut(edge.source()) {
            tracing::trace!(edge = ?edge, "added edge");
            edges.push(edge);
            changed = true;
        }
        if changed {
            self.generation += 1;
        }
        Ok(())
    }

    /// Remove a vertex and its outgoing edges; returns whether it was present.
    ///
    /// Under [`RemovalPolicy::Cascade`] edges from other vertices pointing at
    /// the removed vertex are dropped too. Under [`RemovalPolicy::Retain`]
    /// they stay and keep referencing a vertex the graph no longer contains.
    pub fn remove_vertex(&mut self, vertex: &E::Vertex) -> Result<bool> {
        if vertex.is_null() {
            return Err(GraphError::null_vertex());
        }
        if self.adjacency.remove(vertex).is_none() {
            return Ok(false);
        }

        let dropped: usize = match self.removal_policy {
            RemovalPolicy::Cascade => self
                .adjacency
                .values_mut()
                .map(|edges| edges.retain(|e| e.destination() != vertex))
                .sum(),
            RemovalPolicy::Retain => 0,
        };
        tracing::trace!(vertex = ?vertex, incoming_dropped = dropped, "removed vertex");
        self.generation += 1;
        Ok(true)
    }

    /// Remove an edge; returns whether it was present.
    pub fn remove_edge(&mut self, edge: &E) -> Result<bool> {
        if edge.is_null() {
            return Err(GraphError::null_edge());
        }
        let removed = self
            .adjacency
            .get_mut(edge.source())
            .is_some_and(|edges| edges.remove(edge));
        if removed {
            tracing::trace!(edge = ?edge, "removed edge");
            self.generation += 1;
        }
        Ok(removed)
    }

    pub fn contains_vertex(&self, vertex: &E::Vertex) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn contains_edge(&self, edge: &E) -> bool {
        self.adjacency
            .get(edge.source())
            .is_some_and(|edges| edges.contains(edge))
    }

    /// Number of outgoing edges of `vertex`
    pub fn out_degree(&self, vertex: &E::Vertex) -> Result<usize> {
        Ok(self.edge_list(vertex)?.len())
    }

    /// Number of edges anywhere in the graph whose destination is `vertex`.
    ///
    /// Scans every adjacency list.
    pub fn in_degree(&self, vertex: &E::Vertex) -> Result<usize> {
        self.edge_list(vertex)?;
        Ok(self.edges().filter(|e| e.destination() == vertex).count())
    }

    /// Distinct destinations of the outgoing edges of `vertex`, in order of
    /// first appearance.
    pub fn neighbors(&self, vertex: &E::Vertex) -> Result<Vec<E::Vertex>> {
        self.edge_list(vertex)?;
        Ok(self.distinct_neighbors(vertex))
    }

    /// Outgoing edges of `vertex` in insertion order
    pub fn edges_from(&self, vertex: &E::Vertex) -> Result<Vec<E>> {
        Ok(self.edge_list(vertex)?.iter().cloned().collect())
    }

    /// All edges from `source` to `destination`, parallel edges included
    pub fn edges_between(&self, source: &E::Vertex, destination: &E::Vertex) -> Result<Vec<E>> {
        if source.is_null() || destination.is_null() {
            return Err(GraphError::null_vertex());
        }
        self.edge_list(source)?;
        self.edge_list(destination)?;
        Ok(self.edges_to(source, destination).cloned().collect())
    }

    pub fn vertices(&self) -> impl Iterator<Item = &E::Vertex> + '_ {
        self.adjacency.iter().map(|(v, _)| v)
    }

    /// Every edge of the graph, grouped by source in vertex order
    pub fn edges(&self) -> impl Iterator<Item = &E> + '_ {
        self.adjacency.iter().flat_map(|(_, edges)| edges.iter())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|(_, edges)| edges.len()).sum()
    }

    /// Fail unless the graph is still at `expected` generation
    pub(crate) fn check_generation(&self, expected: u64) -> Result<()> {
        if self.generation == expected {
            Ok(())
        } else {
            Err(GraphError::ConcurrentModification {
                expected,
                found: self.generation,
            })
        }
    }

    /// Validate a traversal root and build its color map over the current
    /// vertex set
    pub(crate) fn fresh_colors(&self, source: &E::Vertex) -> Result<HashMap<E::Vertex, Color>> {
        self.edge_list(source)?;
        Ok(self
            .vertices()
            .map(|v| (v.clone(), Color::Unvisited))
            .collect())
    }

    /// Like [`Graph::neighbors`], but empty for an absent vertex
    pub(crate) fn distinct_neighbors(&self, vertex: &E::Vertex) -> Vec<E::Vertex> {
        let Some(edges) = self.adjacency.get(vertex) else {
            return Vec::new();
        };
        edges
            .iter()
            .map(|e| e.destination().clone())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    pub(crate) fn edges_to<'a>(
        &'a self,
        source: &'a E::Vertex,
        destination: &'a E::Vertex,
    ) -> impl Iterator<Item = &'a E> + 'a {
        self.adjacency
            .get(source)
            .into_iter()
            .flat_map(|edges| edges.iter())
            .filter(move |e| e.destination() == destination)
    }

    fn edge_list(&self, vertex: &E::Vertex) -> Result<&B::Edges> {
        if vertex.is_null() {
            return Err(GraphError::null_vertex());
        }
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    fn insert_vertex(&mut self, vertex: E::Vertex) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        tracing::trace!(vertex = ?vertex, "added vertex");
        let edges = self.builder.new_edges();
        self.adjacency.insert(vertex, edges);
        true
    }
}

impl<E: Edge, B: StorageBuilder<E>> fmt::Debug for Graph<E, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .field("removal_policy", &self.removal_policy)
            .field("generation", &self.generation)
            .finish()
    }
}

/// One vertex per line, then one edge per line
impl<E, B> fmt::Display for Graph<E, B>
where
    E: Edge + fmt::Display,
    E::Vertex: fmt::Display,
    B: StorageBuilder<E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            writeln!(f, "{}", vertex)?;
        }
        for edge in self.edges() {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}
