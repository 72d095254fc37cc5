use super::{require_undirected, SpanningTree};
use crate::{collections::FrontierQueue, graph::*, GraphError, Result};

/// Minimum spanning tree by Prim's method, grown from vertex 0.
///
/// Every vertex outside the tree sits in a frontier queue keyed by the lightest edge
/// connecting it to the tree. Ties go to the lower vertex index.
///
/// Over an [`AdjacencyMatrix`] each extraction scans a full row,
/// which is O(|V|² log |V|) in total; over an [`AdjacencyList`] only real neighbours are
/// visited, O(|E| log |V|).
///
/// Fails with [`GraphError::Disconnected`] if some vertex cannot be reached.
pub fn prim<G>(graph: &G) -> Result<SpanningTree>
where
    G: QueryableGraph,
{
    let order = require_undirected(graph)?;
    let mut in_tree = vec![false; order];
    let mut link: Vec<Option<Edge>> = vec![None; order];
    let mut frontier: FrontierQueue<Weight> = FrontierQueue::with_capacity(order);
    let mut edges = Vec::with_capacity(order - 1);
    let mut total_weight: Distance = 0;

    frontier.insert_or_decrease(VertexId::MIN, 0);
    while let Some((v, _)) = frontier.extract_min() {
        in_tree[v.to_raw()] = true;
        if let Some(e) = link[v.to_raw()] {
            tracing::trace!(%e, "tree edge");
            total_weight += e.weight as Distance;
            edges.push(e);
        }
        for e in graph.out_edges(&v) {
            let u = e.sink.to_raw();
            if !in_tree[u] && frontier.insert_or_decrease(e.sink, e.weight) {
                link[u] = Some(e);
            }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_weights_prefer_lower_index() {
        // a triangle of equal weights; 1 is extracted before 2
        let edges = vec![
            Edge::new(VertexId(0), VertexId(2), 5),
            Edge::new(VertexId(0), VertexId(1), 5),
            Edge::new(VertexId(1), VertexId(2), 5),
        ];
        let list = AdjacencyList::from_edges(3, false, &edges);
        let tree = prim(&list).unwrap();
        assert_eq!(
            tree.edges,
            vec![
                Edge::new(VertexId(0), VertexId(1), 5),
                Edge::new(VertexId(0), VertexId(2), 5),
            ]
        );
        assert_eq!(tree.total_weight, 10);
    }

    #[test]
    fn refuses_directed_graphs() {
        let edges = vec![Edge::new(VertexId(0), VertexId(1), 1)];
        let matrix = AdjacencyMatrix::from_edges(2, true, &edges).unwrap();
        assert!(matches!(prim(&matrix), Err(GraphError::Precondition(_))));
    }

    #[test]
    fn counts_reached_vertices() {
        let edges = vec![Edge::new(VertexId(0), VertexId(1), 1)];
        let matrix = AdjacencyMatrix::from_edges(3, false, &edges).unwrap();
        assert!(matches!(
            prim(&matrix),
            Err(GraphError::Disconnected {
                found: 1,
                needed: 2
            })
        ));
    }
}
