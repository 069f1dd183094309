use fixedbitset::FixedBitSet;

/// Set of visited vertices, addressed by their compact index.
pub trait VisitSet {
    fn visit(&mut self, index: usize) -> bool;
    fn is_visited(&self, index: usize) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl VisitSet for FixedBitSet {
    fn visit(&mut self, index: usize) -> bool {
        if self.len() <= index {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, index: usize) -> bool {
        self.contains(index)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}
