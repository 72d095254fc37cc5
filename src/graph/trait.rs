use crate::graph::*;

/// Read-only capabilities shared by every graph representation.
///
/// Algorithms only ever talk to this trait,
/// so the same algorithm body runs over a matrix or a list.
pub trait QueryableGraph {
    /// Number of vertices.
    fn vertex_size(&self) -> usize;
    /// Number of abstract edges. An undirected edge counts once.
    fn edge_size(&self) -> usize;
    fn is_directed(&self) -> bool;

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(vertices_upto(self.vertex_size()))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }

    /// Every edge exactly once.
    /// Undirected edges are reported with `source < sink`.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Edges leaving `v`, each with `source == v`.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// The lightest edge from `source` to `sink`, if there is any.
    fn find_edge(&self, source: &VertexId, sink: &VertexId) -> Option<Edge>;

    fn debug<'a>(&'a self) -> GraphDebug<'a, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
