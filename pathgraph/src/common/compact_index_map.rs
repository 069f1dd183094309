use std::{collections::HashMap, hash::Hash};

use rustc_hash::FxHashMap;

/// Mapping from vertices to a contiguous sequence of indices `0..n` that can
/// be used in algorithms for addressing vectors and bit sets.
///
/// The map borrows the vertices, so it is valid only as long as the graph is
/// not modified. Indices are assigned in iteration order.
///
/// * memory used: _O(N)_
/// * index to vertex mapping: _O(1)_
/// * vertex to index mapping: _O(1)_ expected
#[derive(Debug)]
pub struct CompactIndexMap<'a, V> {
    vertices: Vec<&'a V>,
    indices: FxHashMap<&'a V, usize>,
}

impl<'a, V: Eq + Hash> CompactIndexMap<'a, V> {
    /// Constructs the map from the iterator of distinct vertices.
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = &'a V>,
    {
        let vertices = iter.into_iter().collect::<Vec<_>>();
        let mut indices = HashMap::with_capacity_and_hasher(vertices.len(), Default::default());

        for (index, vertex) in vertices.iter().enumerate() {
            indices.insert(*vertex, index);
        }

        debug_assert_eq!(indices.len(), vertices.len(), "vertices are not distinct");

        Self { vertices, indices }
    }

    /// Returns the number of vertices in the map.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the map contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Maps the vertex to its index, or `None` if the vertex is not in the
    /// map.
    pub fn to_index(&self, vertex: &V) -> Option<usize> {
        self.indices.get(vertex).copied()
    }

    /// Maps the index back to its vertex.
    pub fn to_vertex(&self, index: usize) -> Option<&'a V> {
        self.vertices.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let vertices = ["a", "b", "c"];
        let map = CompactIndexMap::new(vertices.iter());

        assert_eq!(map.len(), 3);
        assert_eq!(map.to_index(&"b"), Some(1));
        assert_eq!(map.to_index(&"z"), None);
        assert_eq!(map.to_vertex(2), Some(&"c"));
        assert_eq!(map.to_vertex(3), None);
    }

    #[test]
    fn roundtrip() {
        let vertices = (0..100).map(|i| i * 7).collect::<Vec<_>>();
        let map = CompactIndexMap::new(vertices.iter());

        for index in 0..map.len() {
            let vertex = map.to_vertex(index).unwrap();
            assert_eq!(map.to_index(vertex), Some(index));
        }
    }
}
