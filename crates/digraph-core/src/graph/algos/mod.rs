//! Graph algorithm implementations
//!
//! - `bfs` / `dfs`: full-graph traversal walkers
//! - `dijkstra`: single-source shortest paths with path reconstruction
//! - `queue`: mutable-priority queue used by `dijkstra`

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod queue;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::{ShortestPaths, INFINITY};
pub use queue::PriorityQueue;

use crate::error::Result;
use crate::graph::storage::StorageBuilder;
use crate::graph::store::Graph;
use crate::graph::types::{Edge, Vertex};

/// A traversal cursor that does not borrow the graph it walks.
///
/// The graph is passed to every step instead, which lets the caller mutate
/// it between steps. [`Walker::next`] notices such mutations through the
/// graph's generation counter and fails rather than continuing over a
/// changed structure.
pub trait Walker<V: Vertex> {
    /// Generation of the graph when the walk started
    fn generation(&self) -> u64;

    /// Advance one vertex without checking for modification
    fn step<E, B>(&mut self, graph: &Graph<E, B>) -> Option<V>
    where
        E: Edge<Vertex = V>,
        B: StorageBuilder<E>;

    /// Advance one vertex; `None` once the walk is exhausted
    fn next<E, B>(&mut self, graph: &Graph<E, B>) -> Result<Option<V>>
    where
        E: Edge<Vertex = V>,
        B: StorageBuilder<E>,
    {
        graph.check_generation(self.generation())?;
        Ok(self.step(graph))
    }
}

/// Iterator over a walker that holds a shared borrow of the graph, so the
/// graph cannot change until it is dropped.
pub struct Walk<'g, E: Edge, B: StorageBuilder<E>, W> {
    graph: &'g Graph<E, B>,
    walker: W,
}

impl<E, B, W> Iterator for Walk<'_, E, B, W>
where
    E: Edge,
    B: StorageBuilder<E>,
    W: Walker<E::Vertex>,
{
    type Item = E::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.walker.step(self.graph)
    }
}

impl<E: Edge, B: StorageBuilder<E>> Graph<E, B> {
    /// Breadth-first visit of every vertex reachable from `source`
    #[tracing::instrument(skip_all, fields(source = ?source, vertices = self.vertex_count()))]
    pub fn bfs(&self, source: &E::Vertex) -> Result<Walk<'_, E, B, BreadthFirst<E::Vertex>>> {
        Ok(Walk {
            graph: self,
            walker: BreadthFirst::new(self, source)?,
        })
    }

    /// Depth-first visit of every vertex reachable from `source`
    #[tracing::instrument(skip_all, fields(source = ?source, vertices = self.vertex_count()))]
    pub fn dfs(&self, source: &E::Vertex) -> Result<Walk<'_, E, B, DepthFirst<E::Vertex>>> {
        Ok(Walk {
            graph: self,
            walker: DepthFirst::new(self, source)?,
        })
    }
}
