//! Find the [shortest path] between two vertices of a graph.
//!
//! The search is [Dijkstra's algorithm] running on a projection of the
//! graph: each directed edge becomes one arc, each undirected edge becomes
//! two arcs of equal cost, and unweighted edges cost `1.0`. Parallel edges
//! are all kept and the cheapest one wins naturally.
//!
//! If the source or the destination is not in the graph, or the destination
//! is not reachable, the returned path is empty. This is not an error.
//!
//! See available parameters [here](ShortestPathBuilder#implementations).
//!
//! [shortest path]: https://en.wikipedia.org/wiki/Shortest_path_problem
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use pathgraph::{algo::ShortestPath, graph::Graph};
//!
//! let mut graph = Graph::new_weighted();
//!
//! graph
//!     .try_extend_with_edges([
//!         ("Prague", "Bratislava", 328.0),
//!         ("Prague", "Nuremberg", 297.0),
//!         ("Prague", "Vienna", 293.0),
//!         ("Bratislava", "Vienna", 79.0),
//!         ("Nuremberg", "Munich", 170.0),
//!         ("Vienna", "Munich", 402.0),
//!         ("Vienna", "Florence", 863.0),
//!         ("Munich", "Florence", 646.0),
//!         ("Florence", "Rome", 278.0),
//!     ])
//!     .unwrap();
//!
//! let path = ShortestPath::on(&graph).run(&"Prague", &"Rome");
//!
//! assert_eq!(path.cost(), Some(1391.0));
//! assert_eq!(
//!     path.vertices(),
//!     &["Prague", "Nuremberg", "Munich", "Florence", "Rome"]
//! );
//! ```

use crate::core::{Edge, Weight};

mod builder;
mod dijkstra;
mod frontier;

pub use builder::ShortestPathBuilder;

/// Shortest path between two vertices and its cost.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<V> {
    source: V,
    destination: V,
    vertices: Vec<V>,
    cost: Option<f64>,
}

impl<V> ShortestPath<V> {
    fn found(source: V, destination: V, vertices: Vec<V>, cost: f64) -> Self {
        Self {
            source,
            destination,
            vertices,
            cost: Some(cost),
        }
    }

    fn not_found(source: V, destination: V) -> Self {
        Self {
            source,
            destination,
            vertices: Vec::new(),
            cost: None,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn destination(&self) -> &V {
        &self.destination
    }

    /// Returns `true` if a path exists.
    pub fn is_found(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Vertices on the path from the source to the destination, both
    /// included. Empty if there is no path.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total cost of the path, or `None` if there is no path.
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }
}

/// How the cost of an edge is determined during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeCost {
    /// The weight of the edge, or `1.0` for unweighted edges.
    Stored,
    /// Always `1.0`.
    Unit,
}

impl EdgeCost {
    fn get<V>(&self, edge: &Edge<V>) -> f64 {
        match self {
            EdgeCost::Stored => edge.cost(),
            EdgeCost::Unit => Weight::UNIT.get(),
        }
    }
}
