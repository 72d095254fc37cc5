use crate::graph::VertexId;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// A min-priority queue of vertices keyed by a weight or tentative distance.
///
/// It is a binary heap indexed by vertex, so lowering a vertex's key happens in place
/// rather than by pushing a stale duplicate.
/// Equal keys pop the lower vertex index first.
pub struct FrontierQueue<P>
where
    P: Ord + Copy,
{
    heap: KeyedPriorityQueue<VertexId, Reverse<(P, VertexId)>, RandomState>,
}

impl<P> FrontierQueue<P>
where
    P: Ord + Copy,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: KeyedPriorityQueue::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Current key of `v`, if `v` is queued.
    pub fn key(&self, v: &VertexId) -> Option<P> {
        self.heap.get_priority(v).map(|p| (p.0).0)
    }

    /// Queues `v` with `key`, or lowers its key if `v` is queued with a larger one.
    ///
    /// Returns whether the queue changed.
    pub fn insert_or_decrease(&mut self, v: VertexId, key: P) -> bool {
        match self.key(&v) {
            Some(cur) if cur <= key => false,
            _ => {
                self.heap.push(v, Reverse((key, v)));
                true
            }
        }
    }

    /// Pops the vertex with the least key.
    pub fn extract_min(&mut self) -> Option<(VertexId, P)> {
        self.heap.pop().map(|(v, p)| (v, (p.0).0))
    }
}
