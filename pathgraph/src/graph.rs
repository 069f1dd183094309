//! In-memory graph with mixed directed and undirected edges.
//!
//! [`Graph`] owns a set of vertices and a set of [edges](Edge). Vertices are
//! arbitrary values that can be compared and hashed, the graph never looks
//! inside them. Every edge is either directed or undirected, independently of
//! other edges, and multiple edges between the same pair of vertices are
//! allowed as long as they differ in direction or weight.
//!
//! Whether the edges carry a weight is decided once, when the graph is
//! created. Connecting vertices with a weight in an unweighted graph (or
//! without a weight in a weighted graph) is rejected immediately.
//!
//! # Examples
//!
//! ```
//! use pathgraph::graph::Graph;
//!
//! let mut graph = Graph::new_weighted();
//!
//! let edge = graph.connect("Prague", "Vienna", Some(293.0), false).unwrap();
//! graph.connect("Vienna", "Munich", Some(402.0), false).unwrap();
//!
//! assert!(graph.contains(&"Prague"));
//! assert_eq!(graph.vertex_count(), 3);
//!
//! graph.remove(&"Vienna");
//! assert!(!graph.has_edge(&edge));
//! assert_eq!(graph.edge_count(), 0);
//! ```

use std::{collections::HashSet, hash::Hash};

use rustc_hash::FxHashSet;

use crate::core::{Edge, Error, Weight};

/// Set of vertices and edges with a weighted mode fixed for its lifetime.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: FxHashSet<V>,
    edges: FxHashSet<Edge<V>>,
    weighted: bool,
}

impl<V> Graph<V> {
    pub fn new(weighted: bool) -> Self {
        Self {
            vertices: FxHashSet::default(),
            edges: FxHashSet::default(),
            weighted,
        }
    }

    pub fn new_weighted() -> Self {
        Self::new(true)
    }

    pub fn new_unweighted() -> Self {
        Self::new(false)
    }

    pub fn with_capacity(weighted: bool, vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertices: HashSet::with_capacity_and_hasher(vertex_count, Default::default()),
            edges: HashSet::with_capacity_and_hasher(edge_count, Default::default()),
            weighted,
        }
    }

    /// Returns `true` if edges of this graph carry a weight.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the vertices without copying them.
    pub fn iter_vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Iterates over the edges without copying them.
    pub fn iter_edges(&self) -> impl Iterator<Item = &Edge<V>> + '_ {
        self.edges.iter()
    }

    /// Removes all edges, keeping the vertices.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }

    /// Removes all vertices and edges. The weighted mode is kept.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.vertices.clear();
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new_unweighted()
    }
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash,
{
    /// Inserts the vertex. Returns `false` if it was already present.
    pub fn add(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    /// Removes the vertex together with all edges incident to it. Returns
    /// `false` if the vertex was not present.
    pub fn remove(&mut self, vertex: &V) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|edge| !edge.is_incident(vertex));
        tracing::trace!(
            removed_edges = before - self.edges.len(),
            "removed vertex with incident edges"
        );

        true
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns a snapshot of all vertices in unspecified order.
    pub fn vertices(&self) -> Vec<V> {
        self.vertices.iter().cloned().collect()
    }

    /// Connects two vertices by an edge and returns it.
    ///
    /// Both endpoints are added to the graph if not already present. The
    /// weight must be given if and only if the graph is
    /// [weighted](Graph::is_weighted), and it must be a finite non-negative
    /// number. On error, the graph is left unchanged.
    ///
    /// Connecting the same vertices with the same direction and weight again
    /// does not create a new edge.
    pub fn connect(
        &mut self,
        v1: V,
        v2: V,
        weight: Option<f64>,
        directed: bool,
    ) -> Result<Edge<V>, Error> {
        let weight = match (self.weighted, weight) {
            (true, None) => return Err(Error::MissingWeight),
            (false, None) => None,
            (weighted, Some(weight)) => {
                let weight = Weight::try_from(weight)?;
                if !weighted {
                    return Err(Error::UnexpectedWeight(weight));
                }
                Some(weight)
            }
        };

        self.add(v1.clone());
        self.add(v2.clone());

        let edge = Edge::new(v1, v2, directed, weight);
        self.edges.insert(edge.clone());
        Ok(edge)
    }

    pub fn connect_weighted(
        &mut self,
        v1: V,
        v2: V,
        weight: f64,
        directed: bool,
    ) -> Result<Edge<V>, Error> {
        self.connect(v1, v2, Some(weight), directed)
    }

    pub fn connect_unweighted(&mut self, v1: V, v2: V, directed: bool) -> Result<Edge<V>, Error> {
        self.connect(v1, v2, None, directed)
    }

    /// Removes the edge. Returns `false` if it was not present.
    pub fn disconnect(&mut self, edge: &Edge<V>) -> bool {
        self.edges.remove(edge)
    }

    pub fn has_edge(&self, edge: &Edge<V>) -> bool {
        self.edges.contains(edge)
    }

    /// Returns a snapshot of all edges in unspecified order.
    pub fn edges(&self) -> Vec<Edge<V>> {
        self.edges.iter().cloned().collect()
    }

    /// Returns a snapshot of edges that have the vertex as either endpoint.
    pub fn incident_edges(&self, vertex: &V) -> Vec<Edge<V>> {
        self.edges
            .iter()
            .filter(|edge| edge.is_incident(vertex))
            .cloned()
            .collect()
    }

    /// Returns a snapshot of edges that can be traversed from `from` to `to`.
    pub fn edges_between(&self, from: &V, to: &V) -> Vec<Edge<V>> {
        self.edges
            .iter()
            .filter(|edge| edge.allows(from, to))
            .cloned()
            .collect()
    }

    /// Connects vertices for each item of the iterator.
    ///
    /// Stops at the first item that cannot be connected and returns the
    /// error. Items before it stay in the graph.
    pub fn try_extend_with_edges<T, I>(&mut self, iter: I) -> Result<(), Error>
    where
        T: IntoConnection<V>,
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            let (v1, v2, weight, directed) = item.unpack();
            self.connect(v1, v2, weight, directed)?;
        }

        Ok(())
    }
}

/// Anything that describes a single [`connect`](Graph::connect) call.
///
/// Implemented for `(v1, v2)` (unweighted, undirected), `(v1, v2, weight)`
/// (weighted, undirected) and for [`Edge`] itself, which makes it possible to
/// copy edges from one graph to another.
pub trait IntoConnection<V> {
    fn unpack(self) -> (V, V, Option<f64>, bool);
}

impl<V> IntoConnection<V> for (V, V) {
    fn unpack(self) -> (V, V, Option<f64>, bool) {
        (self.0, self.1, None, false)
    }
}

impl<V> IntoConnection<V> for (V, V, f64) {
    fn unpack(self) -> (V, V, Option<f64>, bool) {
        (self.0, self.1, Some(self.2), false)
    }
}

impl<V> IntoConnection<V> for Edge<V> {
    fn unpack(self) -> (V, V, Option<f64>, bool) {
        let directed = self.is_directed();
        let weight = self.weight().map(Weight::get);
        let (v1, v2) = self.into_endpoints();
        (v1, v2, weight, directed)
    }
}
