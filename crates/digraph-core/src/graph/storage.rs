//! Pluggable adjacency storage
//!
//! A [`Graph`](crate::graph::Graph) never names a concrete container. It asks
//! its [`StorageBuilder`] for the vertex → edges map and for a fresh edge
//! collection whenever a vertex is added, so the builder alone decides
//! iteration order and lookup cost.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::hash::Hash;

use indexmap::map as index_map;
use indexmap::IndexMap;

use crate::graph::types::Edge;

/// Ordered collection of the outgoing edges of one vertex
pub trait EdgeCollection<E> {
    type Iter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    fn push(&mut self, edge: E);

    /// Remove the first edge equal to `edge`; returns whether one was found
    fn remove(&mut self, edge: &E) -> bool;

    /// Keep only edges matching `keep`; returns how many were dropped
    fn retain<F: FnMut(&E) -> bool>(&mut self, keep: F) -> usize;

    fn contains(&self, edge: &E) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Self::Iter<'_>;
}

impl<E: PartialEq> EdgeCollection<E> for Vec<E> {
    type Iter<'a>
        = std::slice::Iter<'a, E>
    where
        E: 'a;

    fn push(&mut self, edge: E) {
        Vec::push(self, edge);
    }

    fn remove(&mut self, edge: &E) -> bool {
        match self.iter().position(|e| e == edge) {
            Some(pos) => {
                Vec::remove(self, pos);
                true
            }
            None => false,
        }
    }

    fn retain<F: FnMut(&E) -> bool>(&mut self, keep: F) -> usize {
        let before = self.len();
        Vec::retain(self, keep);
        before - self.len()
    }

    fn contains(&self, edge: &E) -> bool {
        self.as_slice().contains(edge)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

/// Vertex → outgoing edge collection
pub trait AdjacencyMap<V, C> {
    type Iter<'a>: Iterator<Item = (&'a V, &'a C)>
    where
        Self: 'a,
        V: 'a,
        C: 'a;

    type ValuesMut<'a>: Iterator<Item = &'a mut C>
    where
        Self: 'a,
        V: 'a,
        C: 'a;

    fn contains_key(&self, vertex: &V) -> bool;

    fn get(&self, vertex: &V) -> Option<&C>;

    fn get_mut(&mut self, vertex: &V) -> Option<&mut C>;

    fn insert(&mut self, vertex: V, edges: C);

    /// Remove a vertex, keeping the relative order of the others
    fn remove(&mut self, vertex: &V) -> Option<C>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Self::Iter<'_>;

    fn values_mut(&mut self) -> Self::ValuesMut<'_>;
}

impl<V: Hash + Eq, C> AdjacencyMap<V, C> for IndexMap<V, C> {
    type Iter<'a>
        = index_map::Iter<'a, V, C>
    where
        V: 'a,
        C: 'a;

    type ValuesMut<'a>
        = index_map::ValuesMut<'a, V, C>
    where
        V: 'a,
        C: 'a;

    fn contains_key(&self, vertex: &V) -> bool {
        IndexMap::contains_key(self, vertex)
    }

    fn get(&self, vertex: &V) -> Option<&C> {
        IndexMap::get(self, vertex)
    }

    fn get_mut(&mut self, vertex: &V) -> Option<&mut C> {
        IndexMap::get_mut(self, vertex)
    }

    fn insert(&mut self, vertex: V, edges: C) {
        IndexMap::insert(self, vertex, edges);
    }

    fn remove(&mut self, vertex: &V) -> Option<C> {
        self.shift_remove(vertex)
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        IndexMap::iter(self)
    }

    fn values_mut(&mut self) -> Self::ValuesMut<'_> {
        IndexMap::values_mut(self)
    }
}

impl<V: Ord, C> AdjacencyMap<V, C> for BTreeMap<V, C> {
    type Iter<'a>
        = btree_map::Iter<'a, V, C>
    where
        V: 'a,
        C: 'a;

    type ValuesMut<'a>
        = btree_map::ValuesMut<'a, V, C>
    where
        V: 'a,
        C: 'a;

    fn contains_key(&self, vertex: &V) -> bool {
        BTreeMap::contains_key(self, vertex)
    }

    fn get(&self, vertex: &V) -> Option<&C> {
        BTreeMap::get(self, vertex)
    }

    fn get_mut(&mut self, vertex: &V) -> Option<&mut C> {
        BTreeMap::get_mut(self, vertex)
    }

    fn insert(&mut self, vertex: V, edges: C) {
        BTreeMap::insert(self, vertex, edges);
    }

    fn remove(&mut self, vertex: &V) -> Option<C> {
        BTreeMap::remove(self, vertex)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }

    fn values_mut(&mut self) -> Self::ValuesMut<'_> {
        BTreeMap::values_mut(self)
    }
}

/// Factory for the containers backing a graph
pub trait StorageBuilder<E: Edge> {
    type Edges: EdgeCollection<E>;
    type Map: AdjacencyMap<E::Vertex, Self::Edges>;

    fn new_map(&self) -> Self::Map;

    fn new_edges(&self) -> Self::Edges;
}

/// Vertices iterate in insertion order; the default storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionOrder;

impl<E: Edge> StorageBuilder<E> for InsertionOrder {
    type Edges = Vec<E>;
    type Map = IndexMap<E::Vertex, Vec<E>>;

    fn new_map(&self) -> Self::Map {
        IndexMap::new()
    }

    fn new_edges(&self) -> Self::Edges {
        Vec::new()
    }
}

/// Vertices iterate in ascending order of `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedOrder;

impl<E> StorageBuilder<E> for SortedOrder
where
    E: Edge,
    E::Vertex: Ord,
{
    type Edges = Vec<E>;
    type Map = BTreeMap<E::Vertex, Vec<E>>;

    fn new_map(&self) -> Self::Map {
        BTreeMap::new()
    }

    fn new_edges(&self) -> Self::Edges {
        Vec::new()
    }
}
