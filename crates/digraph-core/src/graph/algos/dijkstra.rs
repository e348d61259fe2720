use std::collections::HashMap;
use std::time::Instant;

use indexmap::IndexMap;

use crate::error::{GraphError, Result};
use crate::graph::algos::queue::PriorityQueue;
use crate::graph::storage::StorageBuilder;
use crate::graph::store::Graph;
use crate::graph::types::{Edge, Vertex};
use crate::trace_time;

/// Distance of a vertex the source cannot reach
pub const INFINITY: u64 = u64::MAX;

/// Single-source shortest paths computed once over a graph snapshot.
///
/// The result does not track later changes to the graph.
#[derive(Debug, Clone)]
pub struct ShortestPaths<E: Edge> {
    source: E::Vertex,
    /// Every vertex of the graph at computation time, in graph order
    distances: IndexMap<E::Vertex, u64>,
    predecessors: HashMap<E::Vertex, E>,
}

impl<E: Edge> ShortestPaths<E> {
    /// Run Dijkstra's algorithm from `source`.
    ///
    /// Edge weights are assumed non-negative; this is not checked.
    ///
    /// The predecessor of a vertex is replaced on relaxation only when the
    /// vertex has none yet or the relaxing edge is lighter than the recorded
    /// one. Vertices leave the queue in non-decreasing distance order, so an
    /// improving edge is always strictly lighter than the recorded one and
    /// the reconstructed path adds up to the recorded distance.
    #[tracing::instrument(skip_all, fields(source = ?source, vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn compute<B: StorageBuilder<E>>(graph: &Graph<E, B>, source: &E::Vertex) -> Result<Self> {
        if source.is_null() {
            return Err(GraphError::null_vertex());
        }
        if !graph.contains_vertex(source) {
            return Err(GraphError::vertex_not_found(source));
        }

        let start = Instant::now();
        let mut distances = IndexMap::with_capacity(graph.vertex_count());
        let mut queue = PriorityQueue::new();
        for vertex in graph.vertices() {
            let distance = if vertex == source { 0 } else { INFINITY };
            distances.insert(vertex.clone(), distance);
            queue.enqueue(distance, vertex.clone());
        }

        let mut predecessors: HashMap<E::Vertex, E> = HashMap::new();
        while !queue.is_empty() {
            let current = queue.dequeue()?;
            let base = distances.get(&current).copied().unwrap_or(INFINITY);
            if base == INFINITY {
                // Everything still queued is unreachable
                break;
            }

            for neighbor in graph.distinct_neighbors(&current) {
                for edge in graph.edges_to(&current, &neighbor) {
                    let Some(distance) = distances.get_mut(&neighbor) else {
                        break;
                    };
                    let alt = base.saturating_add(edge.weight().into());
                    if alt >= *distance {
                        continue;
                    }

                    queue.change_priority(*distance, alt, neighbor.clone());
                    *distance = alt;
                    let replace = predecessors
                        .get(&neighbor)
                        .is_none_or(|recorded| edge.weight() < recorded.weight());
                    if replace {
                        predecessors.insert(neighbor.clone(), edge.clone());
                    }
                }
            }
        }

        trace_time!(start, "dijkstra", reached = predecessors.len());
        Ok(Self {
            source: source.clone(),
            distances,
            predecessors,
        })
    }

    pub fn source(&self) -> &E::Vertex {
        &self.source
    }

    /// Distance from the source; `INFINITY` when unreachable, `None` when the
    /// vertex was not in the graph
    pub fn distance(&self, vertex: &E::Vertex) -> Option<u64> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: &E::Vertex) -> bool {
        self.distance(vertex).is_some_and(|d| d != INFINITY)
    }

    /// `(vertex, distance)` pairs in graph vertex order
    pub fn distances(&self) -> impl Iterator<Item = (&E::Vertex, u64)> + '_ {
        self.distances.iter().map(|(v, d)| (v, *d))
    }

    /// The shortest-path tree: one predecessor edge per reached vertex, in
    /// graph vertex order
    pub fn paths(&self) -> impl Iterator<Item = &E> + '_ {
        self.distances
            .keys()
            .filter_map(|vertex| self.predecessors.get(vertex))
    }

    /// Edges from the source to `destination`, in travel order.
    ///
    /// Empty when `destination` is the source.
    pub fn path_to(&self, destination: &E::Vertex) -> Result<Vec<E>> {
        if destination.is_null() {
            return Err(GraphError::null_vertex());
        }
        if !self.distances.contains_key(destination) {
            return Err(GraphError::vertex_not_found(destination));
        }

        let mut path = Vec::new();
        let mut current = destination;
        while *current != self.source {
            // A chain longer than the tree can only be a cycle
            if path.len() >= self.predecessors.len() {
                return Err(GraphError::unreachable(destination));
            }
            let edge = self
                .predecessors
                .get(current)
                .ok_or_else(|| GraphError::unreachable(destination))?;
            path.push(edge.clone());
            current = edge.source();
        }
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod tests;
