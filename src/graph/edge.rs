use super::VertexId;

/// Weight carried by an edge, strictly positive.
pub type Weight = u32;

/// Sum of weights along a path or over a tree.
pub type Distance = u64;

/// The largest weight a generated edge gets unless configured otherwise.
pub const DEFAULT_MAX_WEIGHT: Weight = 97;

/// A weighted edge.
///
/// For undirected graphs `source` and `sink` are interchangeable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: VertexId, sink: VertexId, weight: Weight) -> Self {
        Self {
            source,
            sink,
            weight,
        }
    }

    /// Endpoints ordered so that the lower index comes first.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        if self.source <= self.sink {
            (self.source, self.sink)
        } else {
            (self.sink, self.source)
        }
    }

    /// Sort key used by Kruskal's method: weight first, then endpoints.
    pub(crate) fn sort_key(&self) -> (Weight, VertexId, VertexId) {
        let (a, b) = self.endpoints();
        (self.weight, a, b)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.sink, self.weight)
    }
}
