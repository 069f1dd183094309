use std::{fmt, hash::Hash};

use thiserror::Error;

use crate::graph::Graph;

/// Creates an unweighted graph `0 - 1 - ... - (n-1)`.
pub fn create_path(vertex_count: usize, directed: bool) -> Graph<usize> {
    let mut graph = Graph::with_capacity(false, vertex_count, vertex_count.saturating_sub(1));

    if vertex_count > 0 {
        graph.add(0);
    }

    for v in 1..vertex_count {
        graph
            .connect(v - 1, v, None, directed)
            .expect("unweighted connect without weight cannot fail");
    }

    graph
}

/// Creates an unweighted undirected graph where every pair of distinct
/// vertices is connected.
pub fn create_complete(vertex_count: usize) -> Graph<usize> {
    let edge_count = vertex_count * vertex_count.saturating_sub(1) / 2;
    let mut graph = Graph::with_capacity(false, vertex_count, edge_count);

    for u in 0..vertex_count {
        graph.add(u);
        for v in 0..u {
            graph
                .connect(v, u, None, false)
                .expect("unweighted connect without weight cannot fail");
        }
    }

    graph
}

/// Returns the total cost of walking the vertices in the given order, using
/// the cheapest edge allowed for each hop, or `None` if some hop is not
/// possible or the path is empty.
pub fn path_cost<V>(graph: &Graph<V>, path: &[V]) -> Option<f64>
where
    V: Clone + Eq + Hash,
{
    let first = path.first()?;
    if !graph.contains(first) {
        return None;
    }

    path.windows(2).try_fold(0.0, |total, hop| {
        graph
            .iter_edges()
            .filter(|edge| edge.allows(&hop[0], &hop[1]))
            .map(|edge| edge.cost())
            .min_by(f64::total_cmp)
            .map(|cost| total + cost)
    })
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices snapshot count ({0}) is not equal to vertex count ({1})")]
    VerticesCount(usize, usize),
    #[error("edges snapshot count ({0}) is not equal to edge count ({1})")]
    EdgesCount(usize, usize),
    #[error("edge {0} has an endpoint that is not in the graph")]
    DanglingEdge(String),
    #[error("edge {0} does not match the weighted mode of the graph")]
    WeightedMode(String),
}

/// Checks that the graph upholds its invariants: every edge endpoint is a
/// member of the vertex set and every edge matches the weighted mode.
pub fn check_consistency<V>(graph: &Graph<V>) -> Result<(), ConsistencyCheckError>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    let vertices = graph.vertices();
    if vertices.len() != graph.vertex_count() {
        return Err(ConsistencyCheckError::VerticesCount(
            vertices.len(),
            graph.vertex_count(),
        ));
    }

    let edges = graph.edges();
    if edges.len() != graph.edge_count() {
        return Err(ConsistencyCheckError::EdgesCount(
            edges.len(),
            graph.edge_count(),
        ));
    }

    for edge in edges {
        if !graph.contains(edge.v1()) || !graph.contains(edge.v2()) {
            return Err(ConsistencyCheckError::DanglingEdge(edge.to_string()));
        }

        if edge.is_weighted() != graph.is_weighted() {
            return Err(ConsistencyCheckError::WeightedMode(edge.to_string()));
        }
    }

    Ok(())
}
