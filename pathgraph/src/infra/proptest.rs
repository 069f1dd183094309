use std::{fmt, hash::Hash};

use proptest::{
    collection::vec,
    prelude::*,
    strategy::{NewTree, ValueTree},
    test_runner::TestRunner,
};

use crate::graph::Graph;

pub fn graph<V: Strategy>(vertex: V, weighted: bool) -> GraphStrategy<V> {
    GraphStrategy::new(vertex, weighted)
}

pub fn graph_weighted<V: Strategy>(vertex: V) -> GraphStrategy<V> {
    GraphStrategy::new(vertex, true)
}

pub fn graph_unweighted<V: Strategy>(vertex: V) -> GraphStrategy<V> {
    GraphStrategy::new(vertex, false)
}

pub struct GraphStrategy<V: Strategy> {
    vertex: V,
    weighted: bool,
    params: StrategyParams,
}

impl<V: Strategy> fmt::Debug for GraphStrategy<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("vertex", &self.vertex)
            .field("weighted", &self.weighted)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<V: Strategy> GraphStrategy<V> {
    pub fn new(vertex: V, weighted: bool) -> Self {
        Self::with_params(vertex, weighted, StrategyParams::default())
    }

    pub fn with_params(vertex: V, weighted: bool, params: StrategyParams) -> Self {
        Self {
            vertex,
            weighted,
            params,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_weighted(0..10).max_size(100).directed()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(max_weight, max_weight: u16);
    delegate_builder_fn!(directed);
    delegate_builder_fn!(undirected);
    delegate_builder_fn!(directed_prob, directed_prob: f64);
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    // Weights are generated as integers so that sums of weights along
    // different paths compare exactly.
    max_weight: u16,
    directed_prob: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            max_weight: 16,
            directed_prob: 0.5,
        }
    }
}

impl StrategyParams {
    /// Upper bound for the number of vertices. The number of generated edges
    /// is at most twice as much.
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn max_weight(self, max_weight: u16) -> Self {
        Self { max_weight, ..self }
    }

    /// All edges are directed.
    pub fn directed(self) -> Self {
        self.directed_prob(1.0)
    }

    /// All edges are undirected.
    pub fn undirected(self) -> Self {
        self.directed_prob(0.0)
    }

    /// Probability that a generated edge is directed.
    pub fn directed_prob(self, directed_prob: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&directed_prob),
            "probability must be in [0, 1]"
        );
        Self {
            directed_prob,
            ..self
        }
    }
}

impl<V> Strategy for GraphStrategy<V>
where
    V: Strategy + Clone + 'static,
    V::Value: Clone + Eq + Hash,
{
    type Tree = Box<dyn ValueTree<Value = Graph<V::Value>>>;
    type Value = Graph<V::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let weighted = self.weighted;
        let StrategyParams {
            max_size,
            max_weight,
            directed_prob,
        } = self.params;

        let edge = (
            self.vertex.clone(),
            self.vertex.clone(),
            (0..=max_weight).prop_map(f64::from),
            proptest::bool::weighted(directed_prob),
        );

        (
            vec(self.vertex.clone(), 0..=max_size),
            vec(edge, 0..=2 * max_size),
        )
            .prop_map(move |(vertices, edges)| {
                let mut graph = Graph::with_capacity(weighted, vertices.len(), edges.len());

                for vertex in vertices {
                    graph.add(vertex);
                }

                for (v1, v2, weight, directed) in edges {
                    // Generated weights are always valid and match the mode,
                    // so connecting never fails.
                    let _ = graph.connect(v1, v2, weighted.then_some(weight), directed);
                }

                graph
            })
            .boxed()
            .new_tree(runner)
    }
}
