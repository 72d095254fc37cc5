//! The weighted graph model and its two concrete representations.
//!
//! # `AdjacencyMatrix` and `AdjacencyList`
//!
//! Both are read-only views built from the same abstract edge set.
//! The matrix answers "is there an edge from u to v" in constant time but pays O(|V|) to
//! enumerate neighbours.
//! The list enumerates neighbours in O(deg(v)) and takes memory proportional to the edges.
//!
//! # `Graph`
//!
//! It owns the abstract edges, both representations and the algorithm entry points.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod adjacency_matrix;
pub use self::adjacency_matrix::*;
mod adjacency_list;
pub use self::adjacency_list::*;
mod dual;
pub use self::dual::*;
mod generator;
pub use self::generator::*;
mod loader;
pub use self::loader::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck::Arbitrary;
    use rs_quickcheck_util::*;

    /// A connected edge set: a random spanning tree plus random extra edges.
    ///
    /// Direction is left to the test; treated as directed, vertex 0 reaches every vertex.
    #[derive(Clone)]
    pub struct ConnectedEdges {
        pub order: usize,
        pub edges: Vec<Edge>,
    }

    impl std::fmt::Debug for ConnectedEdges {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{} vertices: ", self.order)?;
            for e in self.edges.iter() {
                write!(f, "{} ", e)?;
            }
            Ok(())
        }
    }

    impl ConnectedEdges {
        pub fn graph(&self, directed: bool) -> Graph {
            let mut g = Graph::from_edges(self.order, self.edges.clone()).unwrap();
            g.init(directed).unwrap();
            g
        }
    }

    fn arbitrary_weight(g: &mut quickcheck::Gen) -> Weight {
        Weight::arbitrary(g) % DEFAULT_MAX_WEIGHT + 1
    }

    impl quickcheck::Arbitrary for ConnectedEdges {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let order = usize::arbitrary(g) % 24 + 1;
            let mut edges: Vec<Edge> = (1..order)
                .map(|v| {
                    let parent = usize::arbitrary(g) % v;
                    Edge::new(VertexId(parent), VertexId(v), arbitrary_weight(g))
                })
                .collect();
            if order > 1 {
                let extra = gen_bytes(g, b"abcd.", b'.', 0..)
                    .iter()
                    .filter_map(|_| {
                        let a = usize::arbitrary(g) % order;
                        let b = usize::arbitrary(g) % order;
                        if a == b {
                            None
                        } else {
                            Some(Edge::new(VertexId(a), VertexId(b), arbitrary_weight(g)))
                        }
                    })
                    .collect::<Vec<_>>();
                edges.extend(extra);
            }
            Self { order, edges }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let tree = self.order.saturating_sub(1);
            let l = self.edges.len();
            let me = self.clone();
            let it = std::iter::successors(Some(tree + (l - tree) / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .filter(move |n| *n < l)
            .map(move |n| {
                let mut res = me.clone();
                res.edges.truncate(n);
                res
            });
            Box::new(it)
        }
    }
}
