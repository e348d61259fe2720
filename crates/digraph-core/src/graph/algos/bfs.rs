use std::collections::{HashMap, VecDeque};

use crate::error::Result;
use crate::graph::algos::Walker;
use crate::graph::storage::StorageBuilder;
use crate::graph::store::Graph;
use crate::graph::types::{Color, Edge, Vertex};

/// Breadth-first walker. Emits vertices in FIFO level order.
#[derive(Debug, Clone)]
pub struct BreadthFirst<V> {
    color: HashMap<V, Color>,
    queue: VecDeque<V>,
    generation: u64,
}

impl<V: Vertex> BreadthFirst<V> {
    /// Start a walk at `source` over the current vertex set of `graph`
    pub fn new<E, B>(graph: &Graph<E, B>, source: &V) -> Result<Self>
    where
        E: Edge<Vertex = V>,
        B: StorageBuilder<E>,
    {
        let mut color = graph.fresh_colors(source)?;
        color.insert(source.clone(), Color::Frontier);
        Ok(Self {
            color,
            queue: VecDeque::from([source.clone()]),
            generation: graph.generation(),
        })
    }
}

impl<V: Vertex> Walker<V> for BreadthFirst<V> {
    fn generation(&self) -> u64 {
        self.generation
    }

    fn step<E, B>(&mut self, graph: &Graph<E, B>) -> Option<V>
    where
        E: Edge<Vertex = V>,
        B: StorageBuilder<E>,
    {
        let current = self.queue.pop_front()?;
        for neighbor in graph.distinct_neighbors(&current) {
            // Dangling destinations have no color and are never visited
            if let Some(color) = self.color.get_mut(&neighbor) {
                if *color == Color::Unvisited {
                    *color = Color::Frontier;
                    self.queue.push_back(neighbor);
                }
            }
        }
        self.color.insert(current.clone(), Color::Done);
        Some(current)
    }
}
