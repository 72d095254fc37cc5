//! Disjoint-set forest with path compression and union by rank.
use crate::graph::VertexId;

/// Tracks which vertices are already connected.
///
/// Both `find` and `union` are amortized near O(1).
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// `n` singleton sets, one per vertex in `[0, n)`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of disjoint sets left.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Representative of the set containing `v`.
    pub fn find(&mut self, v: VertexId) -> VertexId {
        let mut root = v.to_raw();
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = v.to_raw();
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        VertexId(root)
    }

    /// Merges the sets of `a` and `b`.
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let ra = self.find(a).to_raw();
        let rb = self.find(b).to_raw();
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }
}
