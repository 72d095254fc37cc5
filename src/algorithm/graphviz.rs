//! Visualize graphs, and the trees or paths found on them, in the graphviz format.
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/**
 * Dumps a directed/undirected graph into graphviz format.
 *
 * Every edge is labelled with its weight.
 * Edges passed as highlighted, such as those of a spanning tree or a shortest path,
 * are drawn in red.
 *
 * # Examples
 *
 * ```rust
 * use dualgraph::{algorithm::graphviz::*, graph::*};
 *
 * let mut g = Graph::from_edges(
 *     3,
 *     vec![
 *         Edge::new(VertexId(0), VertexId(1), 4),
 *         Edge::new(VertexId(1), VertexId(2), 1),
 *         Edge::new(VertexId(0), VertexId(2), 2),
 *     ],
 * )
 * .unwrap();
 * g.init(false).unwrap();
 * let tree = g.mst_kruskal().unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     g.list()
 *         .unwrap()
 *         .dump_highlighted(&mut buf, "trial", tree.edges)
 *         .unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph trial {
 *   0 ;
 *   1 ;
 *   2 ;
 *   0 -- 1 [label=4] ;
 *   0 -- 2 [label=2, color=red] ;
 *   1 -- 2 [label=1, color=red] ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz
where
    Self: QueryableGraph + Sized,
{
    /**
     * Dumps the graph to a `std::io::Write` object in the graphviz format.
     */
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        self.dump_highlighted(out, graph_name, std::iter::empty())
    }

    /**
     * Dumps the graph with `highlight` edges drawn in red.
     */
    fn dump_highlighted<W, I>(
        &self,
        out: &mut W,
        graph_name: &str,
        highlight: I,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
        I: IntoIterator<Item = Edge>,
    {
        let directed = self.is_directed();
        let key = |e: &Edge| {
            if directed {
                (e.source, e.sink, e.weight)
            } else {
                let (a, b) = e.endpoints();
                (a, b, e.weight)
            }
        };
        let marked: HashSet<_, RandomState> = highlight.into_iter().map(|e| key(&e)).collect();

        if directed {
            writeln!(out, "digraph {} {{", graph_name)?;
        } else {
            writeln!(out, "graph {} {{", graph_name)?;
        }
        for v in self.iter_vertices() {
            writeln!(out, "  {} ;", v)?;
        }
        let dir = if directed { "->" } else { "--" };
        for e in self.iter_edges() {
            if marked.contains(&key(&e)) {
                writeln!(
                    out,
                    "  {} {} {} [label={}, color=red] ;",
                    e.source, dir, e.sink, e.weight
                )?;
            } else {
                writeln!(
                    out,
                    "  {} {} {} [label={}] ;",
                    e.source, dir, e.sink, e.weight
                )?;
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl<G> DumpInGraphviz for G where G: QueryableGraph {}

/// Edges walked by a shortest path, for highlighting.
pub fn path_edges<G>(graph: &G, path: &crate::algorithm::ShortestPath) -> Vec<Edge>
where
    G: QueryableGraph,
{
    path.vertices
        .windows(2)
        .filter_map(|w| graph.find_edge(&w[0], &w[1]))
        .collect()
}
