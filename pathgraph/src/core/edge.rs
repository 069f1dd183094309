use std::fmt;

use super::weight::Weight;

/// Connection between two vertices.
///
/// Edges are immutable values created by
/// [`Graph::connect`](crate::graph::Graph::connect). Their identity is
/// structural: two edges with the same endpoints, directedness and weight are
/// equal, and the graph stores at most one of them. Edges that differ in any
/// of these attributes can coexist between the same pair of vertices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    v1: V,
    v2: V,
    directed: bool,
    weight: Option<Weight>,
}

impl<V> Edge<V> {
    pub(crate) fn new(v1: V, v2: V, directed: bool, weight: Option<Weight>) -> Self {
        Self {
            v1,
            v2,
            directed,
            weight,
        }
    }

    /// The first endpoint. For directed edges, this is where the edge starts.
    pub fn v1(&self) -> &V {
        &self.v1
    }

    /// The second endpoint. For directed edges, this is where the edge ends.
    pub fn v2(&self) -> &V {
        &self.v2
    }

    pub fn endpoints(&self) -> (&V, &V) {
        (&self.v1, &self.v2)
    }

    pub fn into_endpoints(self) -> (V, V) {
        (self.v1, self.v2)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }

    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    /// Cost of traversing the edge. Unweighted edges cost exactly `1.0`.
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(Weight::UNIT).get()
    }
}

impl<V: PartialEq> Edge<V> {
    /// Returns `true` if the vertex is one of the endpoints.
    pub fn is_incident(&self, v: &V) -> bool {
        &self.v1 == v || &self.v2 == v
    }

    /// Returns the endpoint opposite to `v`, or `None` if `v` is not an
    /// endpoint. For a self-loop, the other endpoint is `v` itself.
    pub fn other(&self, v: &V) -> Option<&V> {
        if &self.v1 == v {
            Some(&self.v2)
        } else if &self.v2 == v {
            Some(&self.v1)
        } else {
            None
        }
    }

    /// Returns `true` if the edge can be traversed from `from` to `to`.
    pub fn allows(&self, from: &V, to: &V) -> bool {
        (&self.v1 == from && &self.v2 == to)
            || (!self.directed && &self.v2 == from && &self.v1 == to)
    }
}

impl<V: fmt::Debug> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge{{({:?},{:?}),d={},w=", self.v1, self.v2, self.directed)?;
        match self.weight {
            Some(weight) => write!(f, "{weight}}}"),
            None => f.write_str("None}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    fn w(x: f64) -> Option<Weight> {
        Weight::new(x)
    }

    #[test]
    fn structural_identity() {
        let mut set = FxHashSet::default();

        assert!(set.insert(Edge::new('a', 'b', false, w(1.0))));
        assert!(!set.insert(Edge::new('a', 'b', false, w(1.0))));
        assert!(set.insert(Edge::new('a', 'b', true, w(1.0))));
        assert!(set.insert(Edge::new('a', 'b', false, w(2.0))));
        assert!(set.insert(Edge::new('b', 'a', false, w(1.0))));

        assert_eq!(set.len(), 4);
    }

    #[test]
    fn cost_defaults_to_unit() {
        assert_eq!(Edge::new(1, 2, false, None).cost(), 1.0);
        assert_eq!(Edge::new(1, 2, false, w(2.5)).cost(), 2.5);
    }

    #[test]
    fn allows_respects_direction() {
        let directed = Edge::new('a', 'b', true, None);
        assert!(directed.allows(&'a', &'b'));
        assert!(!directed.allows(&'b', &'a'));

        let undirected = Edge::new('a', 'b', false, None);
        assert!(undirected.allows(&'a', &'b'));
        assert!(undirected.allows(&'b', &'a'));
        assert!(!undirected.allows(&'a', &'c'));
    }

    #[test]
    fn other_endpoint() {
        let edge = Edge::new('a', 'b', true, None);
        assert_eq!(edge.other(&'a'), Some(&'b'));
        assert_eq!(edge.other(&'b'), Some(&'a'));
        assert_eq!(edge.other(&'c'), None);

        let self_loop = Edge::new('a', 'a', false, None);
        assert_eq!(self_loop.other(&'a'), Some(&'a'));
    }

    #[test]
    fn display() {
        assert_eq!(
            Edge::new("S", "A", true, w(1.0)).to_string(),
            r#"Edge{("S","A"),d=true,w=1.0}"#
        );
        assert_eq!(
            Edge::new(1, 2, false, None).to_string(),
            "Edge{(1,2),d=false,w=None}"
        );
    }
}
