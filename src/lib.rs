//! A weighted graph kept in two representations at once, and the classical algorithms run over either.
//!
//! # Dual representation
//!
//! A [`Graph`](graph::Graph) owns one abstract edge set.
//! After [`init`](graph::Graph::init) it projects that set into a dense
//! [`AdjacencyMatrix`](graph::AdjacencyMatrix) and an
//! [`AdjacencyList`](graph::AdjacencyList).
//! Both implement [`QueryableGraph`](graph::QueryableGraph), and every algorithm is written
//! once against that trait.
//! Results computed on either representation must agree;
//! only the access pattern, and thus the running time, differs.
//!
//! # Algorithms
//!
//! * minimum spanning tree by Prim's method, [`prim`](algorithm::prim)
//! * minimum spanning tree by Kruskal's method, [`kruskal`](algorithm::kruskal)
//! * single-source shortest path by Dijkstra's method, [`dijkstra`](algorithm::dijkstra)
//!
//! `Graph` exposes each of them three times: pinned to the matrix, pinned to the list,
//! and a combined entry point which runs on the list.
//!
//! ```rust
//! use dualgraph::graph::*;
//!
//! let mut g = Graph::from_edges(
//!     4,
//!     vec![
//!         Edge::new(VertexId(0), VertexId(1), 1),
//!         Edge::new(VertexId(1), VertexId(2), 2),
//!         Edge::new(VertexId(2), VertexId(3), 3),
//!         Edge::new(VertexId(0), VertexId(3), 10),
//!     ],
//! )
//! .unwrap();
//! g.init(true).unwrap();
//! let path = g.spp_dijkstra(VertexId(0), VertexId(3)).unwrap();
//! assert_eq!(path.distance, 6);
//! ```

pub mod algorithm;
pub mod collections;
mod error;
pub use self::error::*;
pub mod graph;
