use std::hash::Hash;

use fixedbitset::FixedBitSet;

use crate::{
    common::{Adjacency, CompactIndexMap, VisitSet},
    core::Edge,
    graph::Graph,
};

use super::{frontier::Frontier, EdgeCost, ShortestPath};

pub(super) fn dijkstra<V>(
    graph: &Graph<V>,
    source: &V,
    destination: &V,
    edge_cost: EdgeCost,
    exhaustive: bool,
) -> ShortestPath<V>
where
    V: Clone + Eq + Hash,
{
    if !graph.contains(source) || !graph.contains(destination) {
        tracing::debug!("source or destination is not in the graph");
        return ShortestPath::not_found(source.clone(), destination.clone());
    }

    if source == destination {
        let vertices = vec![source.clone()];
        return ShortestPath::found(source.clone(), destination.clone(), vertices, 0.0);
    }

    let map = CompactIndexMap::new(graph.iter_vertices());
    let adjacency = project(&map, graph.iter_edges(), edge_cost);

    // Both are members of the graph, hence of the map.
    let (Some(src), Some(dst)) = (map.to_index(source), map.to_index(destination)) else {
        return ShortestPath::not_found(source.clone(), destination.clone());
    };

    tracing::debug!(
        vertices = adjacency.vertex_count(),
        arcs = adjacency.arc_count(),
        exhaustive,
        "starting search"
    );

    let n = map.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred = vec![None; n];
    let mut visited = FixedBitSet::with_capacity(n);

    dist[src] = 0.0;
    let mut frontier = Frontier::new(dist.clone());

    while let Some((vertex, vertex_dist)) = frontier.pop() {
        if vertex_dist == f64::INFINITY {
            // All remaining vertices are unreachable from the source.
            break;
        }

        visited.visit(vertex);

        // Once extracted, the distance of the destination and the whole
        // chain of its predecessors are final.
        if vertex == dst && !exhaustive {
            break;
        }

        for &(next, cost) in adjacency.arcs(vertex) {
            if visited.is_visited(next) {
                continue;
            }

            let next_dist = vertex_dist + cost;

            // Relaxation operation. If the distance is better than what we
            // had so far, update it.
            if next_dist < dist[next] {
                // Unvisited vertices stay queued until they are popped.
                debug_assert!(frontier.contains(next));

                dist[next] = next_dist;
                pred[next] = Some(vertex);
                frontier.decrease_key(next, next_dist);
                tracing::trace!(from = vertex, to = next, dist = next_dist, "relaxed");
            }
        }
    }

    let indices = reconstruct(&pred, src, dst);
    tracing::debug!(
        settled = visited.visited_count(),
        found = !indices.is_empty(),
        cost = dist[dst],
        "search finished"
    );

    if indices.is_empty() {
        return ShortestPath::not_found(source.clone(), destination.clone());
    }

    let vertices = indices
        .into_iter()
        .filter_map(|index| map.to_vertex(index).cloned())
        .collect();

    ShortestPath::found(source.clone(), destination.clone(), vertices, dist[dst])
}

/// Builds the adjacency over compact indices. Every edge becomes an arc from
/// its first to its second endpoint, undirected edges also get the reverse
/// arc with the same cost.
fn project<'a, V, I>(map: &CompactIndexMap<'a, V>, edges: I, edge_cost: EdgeCost) -> Adjacency
where
    V: Eq + Hash + 'a,
    I: Iterator<Item = &'a Edge<V>>,
{
    let mut arcs = Vec::new();

    for edge in edges {
        let (Some(u), Some(v)) = (map.to_index(edge.v1()), map.to_index(edge.v2())) else {
            // Every endpoint is a member of the graph.
            continue;
        };

        let cost = edge_cost.get(edge);
        arcs.push((u, v, cost));

        if !edge.is_directed() {
            arcs.push((v, u, cost));
        }
    }

    Adjacency::from_arcs(map.len(), arcs)
}

/// Walks the predecessors back from the destination and returns the path in
/// source to destination order, or an empty vector if the walk does not end
/// in the source.
fn reconstruct(pred: &[Option<usize>], src: usize, dst: usize) -> Vec<usize> {
    let mut path = vec![dst];
    let mut curr = dst;

    while let Some(prev) = pred[curr] {
        path.push(prev);
        curr = prev;
    }

    path.reverse();

    if path.first() == Some(&src) {
        path
    } else {
        Vec::new()
    }
}
