mod adjacency;
mod compact_index_map;
mod visit_set;

pub use adjacency::Adjacency;
pub use compact_index_map::CompactIndexMap;
pub use visit_set::VisitSet;
