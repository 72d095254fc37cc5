use super::{require_undirected, SpanningTree};
use crate::{collections::UnionFind, graph::*, GraphError, Result};

/// Minimum spanning tree by Kruskal's method.
///
/// Edges are sorted by weight, ties broken by their endpoints, then accepted
/// whenever they join two different components.
/// The representation only decides how edges are enumerated:
/// an upper-triangle scan of an [`AdjacencyMatrix`] or a concatenation of the lists of an
/// [`AdjacencyList`].
///
/// Fails with [`GraphError::Disconnected`] if the edges do not span every vertex.
pub fn kruskal<G>(graph: &G) -> Result<SpanningTree>
where
    G: QueryableGraph,
{
    let order = require_undirected(graph)?;
    let mut candidates: Vec<Edge> = graph.iter_edges().collect();
    candidates.sort_by_key(|e| e.sort_key());

    let mut components = UnionFind::new(order);
    let mut edges = Vec::with_capacity(order - 1);
    let mut total_weight: Distance = 0;
    for e in candidates {
        if edges.len() + 1 == order {
            break;
        }
        if components.union(e.source, e.sink) {
            tracing::trace!(%e, "tree edge");
            total_weight += e.weight as Distance;
            edges.push(e);
        }
    }

    if edges.len() + 1 < order {
        return Err(GraphError::Disconnected {
            found: edges.len(),
            needed: order - 1,
        });
    }
    Ok(SpanningTree {
        edges,
        total_weight,
    })
}
