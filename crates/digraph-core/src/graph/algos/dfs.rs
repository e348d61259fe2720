use std::collections::HashMap;

use crate::error::Result;
use crate::graph::algos::Walker;
use crate::graph::storage::StorageBuilder;
use crate::graph::store::Graph;
use crate::graph::types::{Color, Edge, Vertex};

/// Depth-first walker backed by an explicit stack.
///
/// Neighbors are pushed in adjacency order without looking at their color;
/// the color is checked when a vertex is popped. A vertex can therefore sit
/// on the stack several times but is emitted once, and the last neighbor
/// pushed is the first one visited. This order differs from recursive
/// pre-order and is part of the observable behavior.
#[derive(Debug, Clone)]
pub struct DepthFirst<V> {
    color: HashMap<V, Color>,
    stack: Vec<V>,
    generation: u64,
}

impl<V: Vertex> DepthFirst<V> {
    /// Start a walk at `source` over the current vertex set of `graph`
    pub fn new<E, B>(graph: &Graph<E, B>, source: &V) -> Result<Self>
    where
        E: Edge<Vertex = V>,
        B: StorageBuilder<E>,
    {
        Ok(Self {
            color: graph.fresh_colors(source)?,
            stack: vec![source.clone()],
            generation: graph.generation(),
        })
    }
}

impl<V: Vertex> Walker<V> for DepthFirst<V> {
    fn generation(&self) -> u64 {
        self.generation
    }

    fn step<E, B>(&mut self, graph: &Graph<E, B>) -> Option<V>
    where
        E: Edge<Vertex = V>,
        B: StorageBuilder<E>,
    {
        while let Some(current) = self.stack.pop() {
            match self.color.get_mut(&current) {
                Some(color) if *color == Color::Unvisited => *color = Color::Done,
                _ => continue,
            }
            self.stack.extend(graph.distinct_neighbors(&current));
            return Some(current);
        }
        None
    }
}
