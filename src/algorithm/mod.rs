//! Graph algorithms
//!
//! Each is written once against [`QueryableGraph`](crate::graph::QueryableGraph)
//! and so runs unchanged over either representation.
mod prim;
pub use self::prim::*;
mod kruskal;
pub use self::kruskal::*;
mod dijkstra;
pub use self::dijkstra::*;
pub mod graphviz;

use crate::graph::*;

/// A minimum spanning tree: `order - 1` edges and their total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: Distance,
}

impl std::fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total weight: {}", self.total_weight)?;
        for e in self.edges.iter() {
            writeln!(f, "  {}", e)?;
        }
        Ok(())
    }
}

/// A shortest path as its vertex sequence, `source` first, and its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub vertices: Vec<VertexId>,
    pub distance: Distance,
}

impl std::fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut it = self.vertices.iter();
        if let Some(v) = it.next() {
            write!(f, "{}", v)?;
            for v in it {
                write!(f, " -> {}", v)?;
            }
        }
        write!(f, " (distance {})", self.distance)
    }
}

fn require_vertices<G: QueryableGraph>(graph: &G) -> crate::Result<usize> {
    match graph.vertex_size() {
        0 => Err(crate::GraphError::Precondition("graph has no vertices")),
        n => Ok(n),
    }
}

fn require_undirected<G: QueryableGraph>(graph: &G) -> crate::Result<usize> {
    if graph.is_directed() {
        return Err(crate::GraphError::Precondition(
            "spanning trees need an undirected graph",
        ));
    }
    require_vertices(graph)
}
