pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;

pub use crate::{
    algo::{find_shortest_path, ShortestPath},
    core::{Edge, Error, Weight},
    graph::Graph,
};
