pub mod edge;
pub mod error;
pub mod weight;

pub use edge::Edge;
pub use error::Error;
pub use weight::Weight;
