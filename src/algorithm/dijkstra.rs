use super::{require_vertices, ShortestPath};
use crate::{collections::FrontierQueue, graph::*, GraphError, Result};

/// Shortest path from `source` to `target` by Dijkstra's method.
///
/// Works on directed and undirected graphs alike; all weights are positive.
/// Vertices leave the frontier in order of tentative distance, lower index first on ties.
/// A vertex's predecessor changes only on a strictly shorter distance,
/// so among equally short paths the first one discovered wins.
/// The search stops as soon as `target` is settled.
///
/// Fails with [`GraphError::InvalidVertex`] if either end is out of range and with
/// [`GraphError::Unreachable`] if no path exists.
pub fn dijkstra<G>(graph: &G, source: VertexId, target: VertexId) -> Result<ShortestPath>
where
    G: QueryableGraph,
{
    let order = require_vertices(graph)?;
    for v in [source, target] {
        if !graph.contains_vertex(&v) {
            return Err(GraphError::InvalidVertex {
                vertex: v.to_raw(),
                order,
            });
        }
    }

    let mut settled = vec![false; order];
    let mut distance: Vec<Option<Distance>> = vec![None; order];
    let mut predecessor: Vec<Option<VertexId>> = vec![None; order];
    let mut frontier: FrontierQueue<Distance> = FrontierQueue::with_capacity(order);

    distance[source.to_raw()] = Some(0);
    frontier.insert_or_decrease(source, 0);
    while let Some((v, d)) = frontier.extract_min() {
        settled[v.to_raw()] = true;
        if v == target {
            break;
        }
        for e in graph.out_edges(&v) {
            let u = e.sink.to_raw();
            if settled[u] {
                continue;
            }
            let candidate = d + e.weight as Distance;
            if distance[u].map_or(true, |cur| candidate < cur) {
                distance[u] = Some(candidate);
                predecessor[u] = Some(v);
                frontier.insert_or_decrease(e.sink, candidate);
            }
        }
    }

    let total = match distance[target.to_raw()] {
        Some(d) if settled[target.to_raw()] => d,
        _ => {
            tracing::debug!(%source, %target, "target unreachable");
            return Err(GraphError::Unreachable {
                from: source.to_raw(),
                to: target.to_raw(),
            });
        }
    };

    let mut vertices = vec![target];
    let mut cur = target;
    while let Some(prev) = predecessor[cur.to_raw()] {
        vertices.push(prev);
        cur = prev;
    }
    vertices.reverse();
    debug_assert_eq!(vertices.first(), Some(&source));
    Ok(ShortestPath {
        vertices,
        distance: total,
    })
}
