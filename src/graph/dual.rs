use crate::{algorithm::*, graph::*, GraphError, Result};

#[derive(Clone)]
struct Representations {
    directed: bool,
    matrix: AdjacencyMatrix,
    list: AdjacencyList,
}

/// A weighted graph kept as both an adjacency matrix and an adjacency list.
///
/// The lifecycle is: construct (empty, from edges, loaded or generated),
/// then [`init`](Self::init) exactly once, then run any number of algorithms.
/// Algorithms only read the graph; running one twice yields the same result.
#[derive(Clone, Default)]
pub struct Graph {
    order: usize,
    edges: Vec<Edge>,
    reps: Option<Representations>,
}

impl Graph {
    /// An empty graph without vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph of `order` vertices over `edges`, not yet initialized.
    ///
    /// Every edge must have both endpoints below `order`, distinct endpoints
    /// and a positive weight.
    pub fn from_edges(order: usize, edges: Vec<Edge>) -> Result<Self> {
        for e in edges.iter() {
            for v in [e.source, e.sink] {
                if v.to_raw() >= order {
                    return Err(GraphError::InvalidVertex {
                        vertex: v.to_raw(),
                        order,
                    });
                }
            }
            if e.source == e.sink {
                return Err(GraphError::Precondition("self-loops are not allowed"));
            }
            if e.weight == 0 {
                return Err(GraphError::Precondition("edge weights must be positive"));
            }
        }
        Ok(Self {
            order,
            edges,
            reps: None,
        })
    }

    /// Projects the edge set into both representations.
    ///
    /// Fails with [`GraphError::TooLarge`] when the matrix cannot be allocated,
    /// leaving the graph uninitialized.
    pub fn init(&mut self, directed: bool) -> Result<()> {
        if self.reps.is_some() {
            return Err(GraphError::Precondition("graph is already initialized"));
        }
        let matrix = AdjacencyMatrix::from_edges(self.order, directed, &self.edges)?;
        let list = AdjacencyList::from_edges(self.order, directed, &self.edges);
        tracing::debug!(
            order = self.order,
            size = self.edges.len(),
            directed,
            "graph initialized"
        );
        self.reps = Some(Representations {
            directed,
            matrix,
            list,
        });
        Ok(())
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of declared edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_initialized(&self) -> bool {
        self.reps.is_some()
    }

    /// `None` until [`init`](Self::init).
    pub fn is_directed(&self) -> Option<bool> {
        self.reps.as_ref().map(|r| r.directed)
    }

    pub fn matrix(&self) -> Result<&AdjacencyMatrix> {
        self.ready().map(|r| &r.matrix)
    }

    pub fn list(&self) -> Result<&AdjacencyList> {
        self.ready().map(|r| &r.list)
    }

    fn ready(&self) -> Result<&Representations> {
        let reps = self
            .reps
            .as_ref()
            .ok_or(GraphError::Precondition("graph is not initialized"))?;
        if self.order == 0 {
            return Err(GraphError::Precondition("graph has no vertices"));
        }
        Ok(reps)
    }

    fn undirected(&self) -> Result<&Representations> {
        let reps = self.ready()?;
        if reps.directed {
            return Err(GraphError::Precondition(
                "spanning trees need an undirected graph",
            ));
        }
        Ok(reps)
    }

    /// Both representations, rendered as text.
    pub fn display(&self) -> Result<String> {
        let reps = self.ready()?;
        Ok(format!("{:?}{:?}", reps.matrix, reps.list))
    }

    pub fn mst_prim(&self) -> Result<SpanningTree> {
        self.mst_prim_list()
    }

    pub fn mst_prim_matrix(&self) -> Result<SpanningTree> {
        prim(&self.undirected()?.matrix)
    }

    pub fn mst_prim_list(&self) -> Result<SpanningTree> {
        prim(&self.undirected()?.list)
    }

    pub fn mst_kruskal(&self) -> Result<SpanningTree> {
        self.mst_kruskal_list()
    }

    pub fn mst_kruskal_matrix(&self) -> Result<SpanningTree> {
        kruskal(&self.undirected()?.matrix)
    }

    pub fn mst_kruskal_list(&self) -> Result<SpanningTree> {
        kruskal(&self.undirected()?.list)
    }

    pub fn spp_dijkstra(&self, source: VertexId, target: VertexId) -> Result<ShortestPath> {
        self.spp_dijkstra_list(source, target)
    }

    pub fn spp_dijkstra_matrix(&self, source: VertexId, target: VertexId) -> Result<ShortestPath> {
        dijkstra(&self.ready()?.matrix, source, target)
    }

    pub fn spp_dijkstra_list(&self, source: VertexId, target: VertexId) -> Result<ShortestPath> {
        dijkstra(&self.ready()?.list, source, target)
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {{")?;
        writeln!(f, "  order: {}, size: {}", self.order, self.edges.len())?;
        match self.reps.as_ref() {
            Some(reps) => write!(f, "{:?}", reps.list.debug().indent(2, 2))?,
            None => {
                for e in self.edges.iter() {
                    writeln!(f, "  {}", e)?;
                }
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}
