use std::fmt;
use std::hash::Hash;

/// Capabilities a vertex type must provide.
///
/// Vertices are map keys, so they need equality and hashing. They are
/// returned by value from queries, so they must be cheap enough to clone
/// (wrap large payloads in `Rc`/`Arc` or use an id).
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {
    /// Whether this value is the empty sentinel that may never be stored.
    fn is_null(&self) -> bool {
        false
    }
}

impl Vertex for String {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

impl Vertex for &str {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! never_null_vertex {
    ($($t:ty),*) => {
        $(impl Vertex for $t {})*
    };
}

never_null_vertex!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);

/// A directed, weighted arc between two vertices.
///
/// Weights are accumulated into `u64` distances, so the weight type must
/// convert losslessly into `u64`. Negative weights are not representable.
pub trait Edge: Clone + PartialEq + fmt::Debug {
    type Vertex: Vertex;
    type Weight: Copy + Ord + Into<u64> + fmt::Debug;

    fn source(&self) -> &Self::Vertex;
    fn destination(&self) -> &Self::Vertex;
    fn weight(&self) -> Self::Weight;

    /// Whether this edge is the empty sentinel. Defaults to either endpoint
    /// being a null vertex.
    fn is_null(&self) -> bool {
        self.source().is_null() || self.destination().is_null()
    }
}

/// Plain value edge, compared by source, destination and weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge<V, W = u32> {
    source: V,
    destination: V,
    weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    pub fn new(source: V, destination: V, weight: W) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

impl<V, W> Edge for WeightedEdge<V, W>
where
    V: Vertex,
    W: Copy + Ord + Into<u64> + fmt::Debug,
{
    type Vertex = V;
    type Weight = W;

    fn source(&self) -> &V {
        &self.source
    }

    fn destination(&self) -> &V {
        &self.destination
    }

    fn weight(&self) -> W {
        self.weight
    }
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for WeightedEdge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}---{}--->{}]",
            self.source, self.weight, self.destination
        )
    }
}

/// Per-vertex traversal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Unvisited,
    Frontier,
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sentinel() {
        assert!(String::new().is_null());
        assert!(!"A".to_string().is_null());
        assert!("".is_null());
        assert!(!0u32.is_null());
    }

    #[test]
    fn test_edge_null_when_endpoint_null() {
        assert!(WeightedEdge::new("", "B", 1u32).is_null());
        assert!(WeightedEdge::new("A", "", 1u32).is_null());
        assert!(!WeightedEdge::new("A", "B", 0u32).is_null());
    }

    #[test]
    fn test_edge_value_equality() {
        let e1 = WeightedEdge::new("A", "B", 3u32);
        assert_eq!(e1, WeightedEdge::new("A", "B", 3u32));
        assert_ne!(e1, WeightedEdge::new("A", "B", 4u32));
        assert_ne!(e1, WeightedEdge::new("B", "A", 3u32));
    }

    #[test]
    fn test_edge_display() {
        let edge = WeightedEdge::new("Start", "A", 2u32);
        assert_eq!(edge.to_string(), "[Start---2--->A]");
    }
}
