/// Outgoing arcs of every vertex in compressed sparse row layout.
///
/// Vertices are numbered from zero up to `vertex_count - 1`. Arcs leaving
/// vertex `u` are stored in a contiguous segment of `arcs` given by the half
/// open range `offsets[u]..offsets[u + 1]`. Each arc is a pair of its
/// destination and cost.
///
/// Parallel arcs are kept as they are, no deduplication is done.
#[derive(Debug, Clone)]
pub struct Adjacency {
    offsets: Vec<usize>,
    arcs: Vec<(usize, f64)>,
}

impl Adjacency {
    /// Builds the adjacency from a list of `(source, destination, cost)`
    /// arcs. All endpoints must be lower than `vertex_count`.
    pub fn from_arcs(vertex_count: usize, arcs: Vec<(usize, usize, f64)>) -> Self {
        // Counting sort by source.
        let mut offsets = vec![0usize; vertex_count + 1];
        for &(src, _, _) in arcs.iter() {
            offsets[src + 1] += 1;
        }

        for i in 0..vertex_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut sorted = vec![(0, 0.0); arcs.len()];

        for (src, dst, cost) in arcs {
            sorted[cursor[src]] = (dst, cost);
            cursor[src] += 1;
        }

        Self {
            offsets,
            arcs: sorted,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Outgoing arcs of the vertex as `(destination, cost)` pairs.
    pub fn arcs(&self, src: usize) -> &[(usize, f64)] {
        &self.arcs[self.offsets[src]..self.offsets[src + 1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let adjacency =
            Adjacency::from_arcs(4, vec![(2, 0, 1.0), (0, 1, 2.0), (2, 3, 3.0), (0, 2, 4.0)]);

        assert_eq!(adjacency.vertex_count(), 4);
        assert_eq!(adjacency.arc_count(), 4);
        assert_eq!(adjacency.arcs(0), &[(1, 2.0), (2, 4.0)]);
        assert!(adjacency.arcs(1).is_empty());
        assert_eq!(adjacency.arcs(2), &[(0, 1.0), (3, 3.0)]);
        assert!(adjacency.arcs(3).is_empty());
    }

    #[test]
    fn parallel_arcs_kept() {
        let adjacency = Adjacency::from_arcs(2, vec![(0, 1, 2.0), (0, 1, 1.0), (0, 1, 2.0)]);

        assert_eq!(adjacency.arcs(0).len(), 3);
    }

    #[test]
    fn empty() {
        let adjacency = Adjacency::from_arcs(0, Vec::new());

        assert_eq!(adjacency.vertex_count(), 0);
        assert_eq!(adjacency.arc_count(), 0);
    }
}
