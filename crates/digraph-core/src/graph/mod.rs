//! Directed graph storage and algorithms
//!
//! - `types`: vertex and edge capabilities, plus a ready-made weighted edge
//! - `storage`: pluggable adjacency containers
//! - `store`: the graph itself and its structural queries
//! - `algos`: BFS/DFS traversal and Dijkstra shortest paths

pub mod algos;
pub mod storage;
pub mod store;
pub mod types;

pub use algos::{
    BreadthFirst, DepthFirst, PriorityQueue, ShortestPaths, Walk, Walker, INFINITY,
};
pub use storage::{
    AdjacencyMap, EdgeCollection, InsertionOrder, SortedOrder, StorageBuilder,
};
pub use store::Graph;
pub use types::{Color, Edge, Vertex, WeightedEdge};
