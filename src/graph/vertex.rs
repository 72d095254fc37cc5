/// ID for vertices, a dense index in `[0, order)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub const MIN: VertexId = VertexId(0);

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Iterates `VertexId`s of a graph with `order` vertices.
pub fn vertices_upto(order: usize) -> impl Iterator<Item = VertexId> {
    (0..order).map(VertexId)
}
