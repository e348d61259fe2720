//! Digraph Core Library
//!
//! Generic in-memory directed graph with structural queries, breadth-first
//! and depth-first traversal, and Dijkstra shortest paths.
//!
//! ```
//! use digraph_core::{Graph, ShortestPaths, WeightedEdge};
//!
//! let mut graph = Graph::new();
//! graph.add_edge(WeightedEdge::new("a", "b", 2u32))?;
//! graph.add_edge(WeightedEdge::new("b", "c", 3u32))?;
//!
//! let visit: Vec<_> = graph.bfs(&"a")?.collect();
//! assert_eq!(visit, ["a", "b", "c"]);
//!
//! let paths = ShortestPaths::compute(&graph, &"a")?;
//! assert_eq!(paths.distance(&"c"), Some(5));
//! # Ok::<(), digraph_core::GraphError>(())
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use config::{GraphConfig, RemovalPolicy};
pub use error::{GraphError, Result};
pub use graph::{
    Edge, Graph, InsertionOrder, ShortestPaths, SortedOrder, StorageBuilder, Vertex, Walker,
    WeightedEdge, INFINITY,
};
