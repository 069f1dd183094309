use std::{fmt, hash::Hash};

use arbitrary::Arbitrary;

use crate::{
    core::{Edge, Error},
    graph::Graph,
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V> {
    Add(V),
    Remove(V),
    Connect(V, V, Option<f64>, bool),
    // Index into the current edges, so that existing edges are hit.
    Disconnect(Index),
    ClearEdges,
    Clear,
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<V> {
    Add(V, bool),
    Remove(V, bool),
    Connect(Result<Edge<V>, Error>),
    Disconnect(Option<Edge<V>>),
    ClearEdges,
    Clear,
}

impl<V> MutOp<V>
where
    V: Clone + Eq + Hash,
{
    pub fn apply(self, graph: &mut Graph<V>) -> MutOpResult<V> {
        match self {
            MutOp::Add(vertex) => {
                let added = graph.add(vertex.clone());
                MutOpResult::Add(vertex, added)
            }
            MutOp::Remove(vertex) => {
                let removed = graph.remove(&vertex);
                MutOpResult::Remove(vertex, removed)
            }
            MutOp::Connect(v1, v2, weight, directed) => {
                MutOpResult::Connect(graph.connect(v1, v2, weight, directed))
            }
            MutOp::Disconnect(index) => {
                let edge = index
                    .get(graph.edge_count())
                    .and_then(|i| graph.iter_edges().nth(i).cloned());

                if let Some(ref edge) = edge {
                    graph.disconnect(edge);
                }

                MutOpResult::Disconnect(edge)
            }
            MutOp::ClearEdges => {
                graph.clear_edges();
                MutOpResult::ClearEdges
            }
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PostconditionError(pub String);

impl<V> MutOpResult<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Checks what must hold in the graph right after the operation.
    pub fn check(&self, graph: &Graph<V>) -> Result<(), PostconditionError> {
        let fail = |msg: String| Err(PostconditionError(msg));

        match self {
            MutOpResult::Add(vertex, _) if !graph.contains(vertex) => {
                fail(format!("{vertex:?} not present after add"))
            }
            MutOpResult::Remove(vertex, _) if graph.contains(vertex) => {
                fail(format!("{vertex:?} present after remove"))
            }
            MutOpResult::Remove(vertex, _) if !graph.incident_edges(vertex).is_empty() => {
                fail(format!("{vertex:?} has incident edges after remove"))
            }
            MutOpResult::Connect(Ok(edge))
                if !graph.contains(edge.v1()) || !graph.contains(edge.v2()) =>
            {
                fail(format!("{edge} endpoints not present after connect"))
            }
            MutOpResult::Connect(Ok(edge)) if !graph.has_edge(edge) => {
                fail(format!("{edge} not present after connect"))
            }
            MutOpResult::Disconnect(Some(edge)) if graph.has_edge(edge) => {
                fail(format!("{edge} present after disconnect"))
            }
            MutOpResult::ClearEdges if graph.edge_count() > 0 => {
                fail(String::from("edges present after clear edges"))
            }
            MutOpResult::Clear if !graph.is_empty() || graph.edge_count() > 0 => {
                fail(String::from("graph not empty after clear"))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Arbitrary)]
pub struct MutOpsSeq<V>(pub Vec<MutOp<V>>);

impl<V> IntoIterator for MutOpsSeq<V> {
    type Item = MutOp<V>;
    type IntoIter = std::vec::IntoIter<MutOp<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for MutOpsSeq<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::{Arbitrary, Unstructured};

    use crate::infra::testing::check_consistency;

    use super::*;

    fn run(ops: MutOpsSeq<u8>, weighted: bool) {
        let mut graph = Graph::new(weighted);

        for op in ops {
            let result = op.apply(&mut graph);
            result.check(&graph).unwrap();
            check_consistency(&graph).unwrap();
        }
    }

    #[test]
    fn replay_mut_ops_seq() {
        run(
            MutOpsSeq(vec![
                MutOp::Connect(1, 2, Some(1.0), true),
                MutOp::Connect(2, 3, None, false),
                MutOp::Connect(3, 1, Some(-1.0), false),
                MutOp::Add(4),
                MutOp::Disconnect(Index(7)),
                MutOp::Connect(4, 4, Some(0.0), false),
                MutOp::Remove(4),
                MutOp::ClearEdges,
                MutOp::Connect(1, 3, Some(2.5), false),
                MutOp::Clear,
            ]),
            true,
        );
    }

    #[test]
    fn check_reports_violation() {
        let mut graph = Graph::new_unweighted();
        graph.add(1u8);

        let result = MutOpResult::Remove(1, true);
        let error = result.check(&graph).unwrap_err();

        assert_eq!(error.to_string(), "1 present after remove");
        assert_eq!(MutOpResult::Add(1, true).check(&graph), Ok(()));
    }

    #[test]
    fn random_mut_ops_seq() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);

        for weighted in [false, true] {
            for _ in 0..32 {
                let bytes = std::iter::repeat_with(|| rng.u8(..))
                    .take(1024)
                    .collect::<Vec<_>>();
                let mut u = Unstructured::new(&bytes);

                if let Ok(ops) = MutOpsSeq::<u8>::arbitrary(&mut u) {
                    run(ops, weighted);
                }
            }
        }
    }
}
