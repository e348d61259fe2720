//! Error types for graph operations
//!
//! Every failure is local and synchronous. Operations validate their
//! arguments (null checks first, then membership) before touching state, so a
//! returned error always means the graph was left unchanged.

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// A default/empty sentinel was passed where a real value is required
    #[error("null argument: {argument}")]
    NullArgument { argument: &'static str },

    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("priority queue is empty")]
    EmptyQueue,

    /// The graph changed between two steps of a traversal
    #[error("graph modified during traversal (generation {expected}, now {found})")]
    ConcurrentModification { expected: u64, found: u64 },

    #[error("destination unreachable from source: {destination}")]
    UnreachableDestination { destination: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Config(#[from] toml::de::Error),
}

impl GraphError {
    /// Create an error for a null vertex argument
    pub fn null_vertex() -> Self {
        GraphError::NullArgument { argument: "vertex" }
    }

    /// Create an error for a null edge argument
    pub fn null_edge() -> Self {
        GraphError::NullArgument { argument: "edge" }
    }

    /// Create an error for a vertex missing from the graph
    pub fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a destination without a predecessor chain
    pub fn unreachable(destination: &impl std::fmt::Debug) -> Self {
        GraphError::UnreachableDestination {
            destination: format!("{:?}", destination),
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::NullArgument { .. } => "null_argument",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::EmptyQueue => "empty_queue",
            GraphError::ConcurrentModification { .. } => "concurrent_modification",
            GraphError::UnreachableDestination { .. } => "unreachable_destination",
            GraphError::Io(_) => "io_error",
            GraphError::Config(_) => "config_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
