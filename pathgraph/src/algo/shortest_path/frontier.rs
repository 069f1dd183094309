const NOT_QUEUED: usize = usize::MAX;

/// Binary min-heap of vertex indices keyed by their distance, with support
/// for decreasing the key of a queued vertex in place.
///
/// A textbook [`BinaryHeap`](std::collections::BinaryHeap) based
/// implementation pushes a vertex again on each successful relaxation and
/// skips the stale entries when popping. Keeping the position of each vertex
/// in the heap allows to update the entry instead, so the heap never holds
/// more than one entry per vertex and each operation is _O(log V)_.
///
/// Keys are compared using [`f64::total_cmp`], so `+infinity` is greater
/// than every finite distance. Keys are never NaN.
#[derive(Debug)]
pub struct Frontier {
    heap: Vec<usize>,
    // Position of each vertex in `heap`, or NOT_QUEUED.
    pos: Vec<usize>,
    keys: Vec<f64>,
}

impl Frontier {
    /// Creates the frontier seeded with all vertices `0..keys.len()` at
    /// given keys.
    pub fn new(keys: Vec<f64>) -> Self {
        let n = keys.len();
        let mut frontier = Self {
            heap: (0..n).collect(),
            pos: (0..n).collect(),
            keys,
        };

        // Heapify bottom-up.
        for i in (0..n / 2).rev() {
            frontier.sift_down(i);
        }

        frontier
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.pos.get(vertex).is_some_and(|&pos| pos != NOT_QUEUED)
    }

    /// Removes the vertex with the smallest key and returns it together with
    /// the key.
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);

        let vertex = self.heap.pop()?;
        self.pos[vertex] = NOT_QUEUED;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((vertex, self.keys[vertex]))
    }

    /// Lowers the key of a queued vertex and restores the heap order.
    ///
    /// # Panics
    ///
    /// Panics if the vertex is not queued or if the new key is greater than
    /// the current one.
    pub fn decrease_key(&mut self, vertex: usize, key: f64) {
        let pos = self.pos[vertex];
        assert!(pos != NOT_QUEUED, "vertex is not in the frontier");
        assert!(
            key.total_cmp(&self.keys[vertex]).is_le(),
            "new key is greater than the current one"
        );

        self.keys[vertex] = key;
        self.sift_up(pos);
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.keys[self.heap[i]]
            .total_cmp(&self.keys[self.heap[j]])
            .is_lt()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.pos[self.heap[i]] = i;
        self.pos[self.heap[j]] = j;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();

        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < n && self.less(left, smallest) {
                smallest = left;
            }

            if right < n && self.less(right, smallest) {
                smallest = right;
            }

            if smallest == i {
                break;
            }

            self.swap(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
impl Frontier {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn key(&self, vertex: usize) -> f64 {
        self.keys[vertex]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn drain(frontier: &mut Frontier) -> Vec<(usize, f64)> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn pops_in_key_order() {
        let mut frontier = Frontier::new(vec![3.0, 1.0, f64::INFINITY, 0.0, 2.0]);

        assert_eq!(frontier.len(), 5);
        assert_eq!(
            drain(&mut frontier),
            vec![(3, 0.0), (1, 1.0), (4, 2.0), (0, 3.0), (2, f64::INFINITY)]
        );
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn decrease_key_reorders() {
        let inf = f64::INFINITY;
        let mut frontier = Frontier::new(vec![0.0, inf, inf, inf]);

        assert_eq!(frontier.pop(), Some((0, 0.0)));
        assert!(!frontier.contains(0));
        assert!((1..4).all(|vertex| frontier.contains(vertex)));

        frontier.decrease_key(3, 5.0);
        frontier.decrease_key(2, 7.0);
        frontier.decrease_key(2, 4.0);

        assert_eq!(frontier.key(2), 4.0);
        assert_eq!(drain(&mut frontier), vec![(2, 4.0), (3, 5.0), (1, inf)]);
    }

    #[test]
    #[should_panic(expected = "not in the frontier")]
    fn decrease_key_popped() {
        let mut frontier = Frontier::new(vec![0.0, 1.0]);
        frontier.pop();
        frontier.decrease_key(0, 0.0);
    }

    #[test]
    #[should_panic(expected = "greater than the current one")]
    fn decrease_key_increase() {
        let mut frontier = Frontier::new(vec![0.0, 1.0]);
        frontier.decrease_key(1, 2.0);
    }

    #[test]
    fn empty() {
        let mut frontier = Frontier::new(Vec::new());

        assert!(frontier.is_empty());
        assert!(!frontier.contains(0));
        assert_eq!(frontier.pop(), None);
    }

    proptest! {
        #[test]
        fn proptest_frontier_sorted(keys in prop::collection::vec(0u16..1000, 0..64), updates in prop::collection::vec((any::<prop::sample::Index>(), 0u16..1000), 0..64)) {
            let mut keys = keys.into_iter().map(f64::from).collect::<Vec<_>>();
            let mut frontier = Frontier::new(keys.clone());

            if !keys.is_empty() {
                for (index, key) in updates {
                    let vertex = index.index(keys.len());
                    let key = f64::from(key);
                    if key < keys[vertex] {
                        keys[vertex] = key;
                        frontier.decrease_key(vertex, key);
                    }
                }
            }

            let popped = drain(&mut frontier);
            prop_assert_eq!(popped.len(), keys.len());

            for window in popped.windows(2) {
                prop_assert!(window[0].1 <= window[1].1);
            }

            for (vertex, key) in popped {
                prop_assert_eq!(key, keys[vertex]);
            }
        }
    }
}
