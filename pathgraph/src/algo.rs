pub mod shortest_path;

use std::hash::Hash;

pub use shortest_path::ShortestPath;

use crate::graph::Graph;

/// Returns the vertices on the cheapest path from `source` to `destination`,
/// both included.
///
/// The result is empty if there is no such path, including when either
/// vertex is not in the graph. For `source == destination`, the result is
/// just `[source]`.
///
/// This is a shorthand for `ShortestPath::on(graph).run(source,
/// destination).into_vertices()`. See [`ShortestPath`] for more options.
pub fn find_shortest_path<V>(graph: &Graph<V>, source: &V, destination: &V) -> Vec<V>
where
    V: Clone + Eq + Hash,
{
    ShortestPath::on(graph)
        .run(source, destination)
        .into_vertices()
}
