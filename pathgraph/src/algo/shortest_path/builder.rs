use std::hash::Hash;

use crate::graph::Graph;

use super::{dijkstra::dijkstra, EdgeCost, ShortestPath};

pub struct ShortestPathBuilder<'a, V> {
    graph: &'a Graph<V>,
    edge_cost: EdgeCost,
    exhaustive: bool,
}

impl<V> ShortestPath<V> {
    pub fn on(graph: &Graph<V>) -> ShortestPathBuilder<'_, V> {
        ShortestPathBuilder {
            graph,
            edge_cost: EdgeCost::Stored,
            exhaustive: false,
        }
    }
}

impl<'a, V> ShortestPathBuilder<'a, V> {
    /// Ignore the edge weights and count every edge as `1.0`.
    pub fn unit_weight(self) -> Self {
        Self {
            edge_cost: EdgeCost::Unit,
            ..self
        }
    }

    /// Do not stop when the destination is reached and settle every vertex
    /// reachable from the source.
    ///
    /// The result is the same as without this option.
    pub fn exhaustive(self) -> Self {
        Self {
            exhaustive: true,
            ..self
        }
    }

    pub fn run(self, source: &V, destination: &V) -> ShortestPath<V>
    where
        V: Clone + Eq + Hash,
    {
        let ShortestPathBuilder {
            graph,
            edge_cost,
            exhaustive,
        } = self;

        dijkstra(graph, source, destination, edge_cost, exhaustive)
    }
}
