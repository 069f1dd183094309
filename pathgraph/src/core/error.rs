use thiserror::Error;

use super::weight::Weight;

/// The error encountered when connecting two vertices.
///
/// All variants are raised by [`connect`](crate::graph::Graph::connect)
/// before the graph is modified, so a failed call leaves the graph as it was.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The weight is negative, infinite or NaN.
    #[error("weight must be a finite non-negative number, got {0}")]
    InvalidWeight(f64),

    /// The graph is weighted, but no weight was given.
    #[error("graph is weighted but no weight was given")]
    MissingWeight,

    /// The graph is unweighted, but a weight was given.
    #[error("graph is unweighted but a weight was given ({0})")]
    UnexpectedWeight(Weight),
}
