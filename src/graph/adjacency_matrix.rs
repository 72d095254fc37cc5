use crate::{graph::*, GraphError, Result};

/// Cell value meaning "no edge". Weights are strictly positive, so it never collides.
pub const NO_EDGE: Weight = 0;

/// A dense `order × order` weight matrix in one contiguous row-major buffer.
///
/// | Operation     | Complexity        |
/// | ------------- | ----------------- |
/// | `find_edge`   | O(1)              |
/// | `out_edges`   | O(\|V\|)          |
/// | `iter_edges`  | O(\|V\|²)         |
/// | memory        | O(\|V\|²)         |
///
/// Undirected graphs keep the matrix symmetric; the diagonal is always `NO_EDGE`.
/// When the input declares parallel edges, the cell holds the lightest one.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    order: usize,
    directed: bool,
    size: usize,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Builds the matrix from an edge set whose endpoints are all below `order`
    /// and which carries no self-loops.
    ///
    /// Fails with [`GraphError::TooLarge`] when `order²` cells cannot be allocated.
    pub fn from_edges<'a, I>(order: usize, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut res = Self {
            order,
            directed,
            size: 0,
            cells: Self::alloc_cells(order)?,
        };
        for e in edges {
            debug_assert!(e.source != e.sink);
            debug_assert!(e.weight != NO_EDGE);
            res.put(e.source, e.sink, e.weight);
            if !directed {
                res.put(e.sink, e.source, e.weight);
            }
        }
        res.size = res.count_edges();
        Ok(res)
    }

    fn alloc_cells(order: usize) -> Result<Vec<Weight>> {
        let len = order
            .checked_mul(order)
            .ok_or(GraphError::TooLarge { order })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GraphError::TooLarge { order })?;
        cells.resize(len, NO_EDGE);
        Ok(cells)
    }

    fn index(&self, source: VertexId, sink: VertexId) -> usize {
        source.to_raw() * self.order + sink.to_raw()
    }

    fn put(&mut self, source: VertexId, sink: VertexId, weight: Weight) {
        let idx = self.index(source, sink);
        let cell = &mut self.cells[idx];
        if *cell == NO_EDGE || weight < *cell {
            *cell = weight;
        }
    }

    fn count_edges(&self) -> usize {
        let occupied = self.cells.iter().filter(|w| **w != NO_EDGE).count();
        if self.directed {
            occupied
        } else {
            occupied / 2
        }
    }

    /// Raw cell value, `NO_EDGE` when absent. Panics when out of range.
    pub fn cell(&self, source: VertexId, sink: VertexId) -> Weight {
        self.cells[self.index(source, sink)]
    }

    fn row(&self, v: VertexId) -> &[Weight] {
        let start = v.to_raw() * self.order;
        &self.cells[start..start + self.order]
    }
}

impl QueryableGraph for AdjacencyMatrix {
    fn vertex_size(&self) -> usize {
        self.order
    }

    fn edge_size(&self) -> usize {
        self.size
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let directed = self.directed;
        let it = self.iter_vertices().flat_map(move |v| {
            let first = if directed { 0 } else { v.to_raw() + 1 };
            self.row(v)
                .iter()
                .enumerate()
                .skip(first)
                .filter(|(_, w)| **w != NO_EDGE)
                .map(move |(j, w)| Edge::new(v, VertexId(j), *w))
        });
        Box::new(it)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        if !self.contains_vertex(v) {
            return Box::new(std::iter::empty());
        }
        let source = *v;
        let it = self
            .row(source)
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != NO_EDGE)
            .map(move |(j, w)| Edge::new(source, VertexId(j), *w));
        Box::new(it)
    }

    fn find_edge(&self, source: &VertexId, sink: &VertexId) -> Option<Edge> {
        if !self.contains_vertex(source) || !self.contains_vertex(sink) {
            return None;
        }
        match self.cell(*source, *sink) {
            NO_EDGE => None,
            w => Some(Edge::new(*source, *sink, w)),
        }
    }
}

impl std::fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyMatrix {{")?;
        for v in self.iter_vertices() {
            for w in self.row(v) {
                write!(f, "{:>4}", w)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Edge> {
        vec![
            Edge::new(VertexId(0), VertexId(1), 1),
            Edge::new(VertexId(1), VertexId(2), 2),
            Edge::new(VertexId(2), VertexId(3), 3),
            Edge::new(VertexId(0), VertexId(3), 10),
            Edge::new(VertexId(0), VertexId(2), 4),
        ]
    }

    #[test]
    fn undirected_is_symmetric() {
        let m = AdjacencyMatrix::from_edges(4, false, &sample()).unwrap();
        for i in m.iter_vertices() {
            assert_eq!(m.cell(i, i), NO_EDGE);
            for j in m.iter_vertices() {
                assert_eq!(m.cell(i, j), m.cell(j, i));
            }
        }
        assert_eq!(m.edge_size(), 5);
        assert_eq!(m.iter_edges().count(), 5);
        assert!(m.iter_edges().all(|e| e.source < e.sink));
    }

    #[test]
    fn directed_keeps_direction() {
        let m = AdjacencyMatrix::from_edges(4, true, &sample()).unwrap();
        assert_eq!(
            m.find_edge(&VertexId(0), &VertexId(3)),
            Some(Edge::new(VertexId(0), VertexId(3), 10))
        );
        assert_eq!(m.find_edge(&VertexId(3), &VertexId(0)), None);
        let outs: Vec<_> = m.out_edges(&VertexId(0)).map(|e| e.sink).collect();
        assert_eq!(outs, vec![VertexId(1), VertexId(2), VertexId(3)]);
    }

    #[test]
    fn parallel_edges_keep_lightest() {
        let edges = vec![
            Edge::new(VertexId(0), VertexId(1), 7),
            Edge::new(VertexId(1), VertexId(0), 3),
        ];
        let m = AdjacencyMatrix::from_edges(2, false, &edges).unwrap();
        assert_eq!(m.cell(VertexId(0), VertexId(1)), 3);
        assert_eq!(m.edge_size(), 1);
    }

    #[test]
    fn oversized_order_is_refused() {
        // the cell count overflows usize
        assert!(matches!(
            AdjacencyMatrix::from_edges(usize::MAX / 2, false, &[]),
            Err(GraphError::TooLarge { .. })
        ));
        // the cell count fits but its byte size does not
        let order = 1usize << (usize::BITS / 2 - 1);
        assert!(matches!(
            AdjacencyMatrix::from_edges(order, true, &[]),
            Err(GraphError::TooLarge { order: o }) if o == order
        ));
    }

    #[test]
    fn out_of_range_queries_are_empty() {
        let m = AdjacencyMatrix::from_edges(4, false, &sample()).unwrap();
        assert_eq!(m.out_edges(&VertexId(9)).count(), 0);
        assert_eq!(m.find_edge(&VertexId(0), &VertexId(9)), None);
    }
}
