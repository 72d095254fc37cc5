use crate::graph::*;

/// One entry of a vertex's neighbour list.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: Weight,
}

/// Per-vertex neighbour lists packed in compressed-sparse-row layout.
///
/// `entries[offsets[v]..offsets[v + 1]]` are the neighbours of `v`,
/// in the order their edges were declared.
///
/// | Operation     | Complexity        |
/// | ------------- | ----------------- |
/// | `find_edge`   | O(deg(v))         |
/// | `out_edges`   | O(deg(v))         |
/// | `iter_edges`  | O(\|V\| + \|E\|)  |
/// | memory        | O(\|V\| + \|E\|)  |
///
/// An undirected edge appears once in the list of each endpoint,
/// so `entry_count()` is `edge_size()` for directed graphs and twice that otherwise.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    directed: bool,
    size: usize,
    offsets: Vec<usize>,
    entries: Vec<Neighbor>,
}

impl AdjacencyList {
    /// Builds the lists from an edge set whose endpoints are all below `order`.
    pub fn from_edges<'a, I>(order: usize, directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = &'a Edge>,
        I::IntoIter: Clone,
    {
        let edges = edges.into_iter();
        let mut degrees = vec![0usize; order];
        let mut size = 0;
        for e in edges.clone() {
            size += 1;
            degrees[e.source.to_raw()] += 1;
            if !directed {
                degrees[e.sink.to_raw()] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(order + 1);
        offsets.push(0);
        for d in degrees.iter() {
            let last = *offsets.last().unwrap_or(&0);
            offsets.push(last + d);
        }

        let placeholder = Neighbor {
            vertex: VertexId::MIN,
            weight: 0,
        };
        let mut entries = vec![placeholder; offsets[order]];
        let mut cursor: Vec<usize> = offsets[..order].to_vec();
        let mut place = |from: VertexId, to: VertexId, weight: Weight| {
            let slot = &mut cursor[from.to_raw()];
            entries[*slot] = Neighbor { vertex: to, weight };
            *slot += 1;
        };
        for e in edges {
            place(e.source, e.sink, e.weight);
            if !directed {
                place(e.sink, e.source, e.weight);
            }
        }

        Self {
            directed,
            size,
            offsets,
            entries,
        }
    }

    /// Neighbours of `v`; empty when `v` is out of range.
    pub fn neighbors(&self, v: &VertexId) -> &[Neighbor] {
        let i = v.to_raw();
        if i + 1 >= self.offsets.len() {
            return &[];
        }
        &self.entries[self.offsets[i]..self.offsets[i + 1]]
    }

    pub fn degree(&self, v: &VertexId) -> usize {
        self.neighbors(v).len()
    }

    /// Total number of list entries over all vertices.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl QueryableGraph for AdjacencyList {
    fn vertex_size(&self) -> usize {
        self.offsets.len() - 1
    }

    fn edge_size(&self) -> usize {
        self.size
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let directed = self.directed;
        let it = self
            .iter_vertices()
            .flat_map(move |v| self.out_edges(&v))
            .filter(move |e| directed || e.source < e.sink);
        Box::new(it)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let source = *v;
        let it = self
            .neighbors(v)
            .iter()
            .map(move |n| Edge::new(source, n.vertex, n.weight));
        Box::new(it)
    }

    fn find_edge(&self, source: &VertexId, sink: &VertexId) -> Option<Edge> {
        self.neighbors(source)
            .iter()
            .filter(|n| n.vertex == *sink)
            .map(|n| n.weight)
            .min()
            .map(|w| Edge::new(*source, *sink, w))
    }
}

impl std::fmt::Debug for AdjacencyList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyList {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
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
        ]
    }

    #[test]
    fn undirected_entries_double() {
        let l = AdjacencyList::from_edges(4, false, &sample());
        assert_eq!(l.edge_size(), 4);
        assert_eq!(l.entry_count(), 8);
        assert_eq!(l.degree(&VertexId(0)), 2);
        assert_eq!(
            l.find_edge(&VertexId(3), &VertexId(0)),
            Some(Edge::new(VertexId(3), VertexId(0), 10))
        );
        let mut edges: Vec<_> = l.iter_edges().collect();
        edges.sort();
        assert_eq!(edges.len(), 4);
        assert!(edges.iter().all(|e| e.source < e.sink));
    }

    #[test]
    fn directed_entries_single() {
        let l = AdjacencyList::from_edges(4, true, &sample());
        assert_eq!(l.entry_count(), 4);
        assert_eq!(l.find_edge(&VertexId(3), &VertexId(0)), None);
        assert_eq!(l.degree(&VertexId(3)), 0);
        let outs: Vec<_> = l.out_edges(&VertexId(0)).map(|e| e.sink).collect();
        assert_eq!(outs, vec![VertexId(1), VertexId(3)]);
    }

    #[test]
    fn parallel_edges_stay_listed() {
        let edges = vec![
            Edge::new(VertexId(0), VertexId(1), 7),
            Edge::new(VertexId(1), VertexId(0), 3),
        ];
        let l = AdjacencyList::from_edges(2, false, &edges);
        assert_eq!(l.entry_count(), 4);
        assert_eq!(l.iter_edges().count(), 2);
        assert_eq!(l.find_edge(&VertexId(0), &VertexId(1)).map(|e| e.weight), Some(3));
    }

    #[test]
    fn empty_graph() {
        let l = AdjacencyList::from_edges(0, false, &[]);
        assert_eq!(l.vertex_size(), 0);
        assert_eq!(l.iter_edges().count(), 0);
        assert!(l.neighbors(&VertexId(0)).is_empty());
    }
}
