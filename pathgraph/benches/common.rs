#![allow(dead_code)]

use fastrand::Rng;
use pathgraph::Graph;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    // Geometric skipping over the lower triangle of the adjacency matrix, so
    // that each pair is chosen with probability `p`.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

pub fn pathgraph_random_directed(vertex_count: usize, density: f32, rng: &mut Rng) -> Graph<u32> {
    let mut graph = Graph::with_capacity(true, vertex_count, 0);

    for v in 0..vertex_count {
        graph.add(v as u32);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph
            .connect(u as u32, v as u32, Some(f64::from(rng.f32())), true)
            .unwrap();
    }

    graph
}

pub fn petgraph_random_directed(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, f64, petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for v in 0..vertex_count {
        graph.add_node(v as u32);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), f64::from(rng.f32()));
    }

    graph
}
