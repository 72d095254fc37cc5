//! Reading graphs from flat edge lists.
//!
//! ```plain
//! <edgeCount> <vertexCount>
//! <from> <to> <weight>
//! ...
//! ```
//!
//! Fields are separated by any whitespace and blank lines are skipped.
//! Lines after the declared number of edges are ignored.
use crate::{graph::*, GraphError, Result};
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

fn malformed(line: usize, reason: impl Into<String>) -> GraphError {
    GraphError::Format {
        line,
        reason: reason.into(),
    }
}

fn field<T: FromStr>(line: usize, name: &str, token: Option<&str>) -> Result<T> {
    let token = token.ok_or_else(|| malformed(line, format!("missing {}", name)))?;
    token
        .parse()
        .map_err(|_| malformed(line, format!("{} `{}` is not a non-negative integer", name, token)))
}

fn parse_edge(line: usize, text: &str, order: usize) -> Result<Edge> {
    let mut tokens = text.split_whitespace();
    let from: usize = field(line, "source vertex", tokens.next())?;
    let to: usize = field(line, "sink vertex", tokens.next())?;
    let weight: Weight = field(line, "weight", tokens.next())?;
    for v in [from, to] {
        if v >= order {
            return Err(malformed(
                line,
                format!("vertex {} is out of range 0..{}", v, order),
            ));
        }
    }
    if from == to {
        return Err(malformed(line, format!("self-loop on vertex {}", from)));
    }
    if weight == 0 {
        return Err(malformed(line, "weight must be positive"));
    }
    Ok(Edge::new(VertexId(from), VertexId(to), weight))
}

/// Parses an edge list into `(order, edges)`.
pub fn read_edge_list<R>(reader: R) -> Result<(usize, Vec<Edge>)>
where
    R: BufRead,
{
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| l.as_ref().map_or(true, |l| !l.trim().is_empty()));

    let (header_line, header) = match lines.next() {
        Some((n, l)) => (n, l?),
        None => return Err(malformed(1, "missing header")),
    };
    let mut tokens = header.split_whitespace();
    let size: usize = field(header_line, "edge count", tokens.next())?;
    let order: usize = field(header_line, "vertex count", tokens.next())?;

    // the header is untrusted; grow as records actually arrive
    let mut edges = Vec::new();
    let mut last_line = header_line;
    while edges.len() < size {
        match lines.next() {
            Some((n, l)) => {
                edges.push(parse_edge(n, &l?, order)?);
                last_line = n;
            }
            None => {
                tracing::warn!(declared = size, found = edges.len(), "edge list is short");
                return Err(malformed(
                    last_line + 1,
                    format!("expected {} edges, found {}", size, edges.len()),
                ));
            }
        }
    }
    tracing::debug!(order, size, "edge list parsed");
    Ok((order, edges))
}

impl Graph {
    /// Loads a graph from an edge-list file. It still needs [`init`](Self::init).
    pub fn load_from_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let file = std::fs::File::open(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading graph");
        Self::load_from_reader(std::io::BufReader::new(file))
    }

    pub fn load_from_reader<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        let (order, edges) = read_edge_list(reader)?;
        Self::from_edges(order, edges)
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::load_from_reader(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_separated_file() {
        let g: Graph = "5\t4\n0\t1\t1\n1\t2\t2\n2\t3\t3\n0\t3\t10\n0\t2\t4\n"
            .parse()
            .unwrap();
        assert_eq!(g.order(), 4);
        assert_eq!(g.size(), 5);
        assert_eq!(g.edges()[4], Edge::new(VertexId(0), VertexId(2), 4));
    }

    #[test]
    fn blank_and_trailing_lines() {
        let g: Graph = "\n2 3\n\n0 1 5\n1 2 6\n9 9 9\n".parse().unwrap();
        assert_eq!(g.order(), 3);
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn malformed_header() {
        for text in ["", "x 3\n", "4\n"] {
            let res: Result<Graph> = text.parse();
            assert!(
                matches!(res, Err(GraphError::Format { line: 1, .. })),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn short_edge_list() {
        let res: Result<Graph> = "3 3\n0 1 1\n1 2 1\n".parse();
        match res {
            Err(GraphError::Format { line, reason }) => {
                assert_eq!(line, 4);
                assert_eq!(reason, "expected 3 edges, found 2");
            }
            other => panic!("{:?}", other.map(|g| g.size())),
        }
    }

    #[test]
    fn oversized_edge_count() {
        let res: Result<Graph> = "1000000000000000000 2\n0 1 1\n".parse();
        match res {
            Err(GraphError::Format { line, reason }) => {
                assert_eq!(line, 3);
                assert_eq!(reason, "expected 1000000000000000000 edges, found 1");
            }
            other => panic!("{:?}", other.map(|g| g.size())),
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_order_fails_on_init() {
        let mut g: Graph = "1 8589934592\n0 1 1\n".parse().unwrap();
        assert_eq!(g.order(), 8589934592);
        assert!(matches!(
            g.init(false),
            Err(GraphError::TooLarge { order: 8589934592 })
        ));
        assert!(!g.is_initialized());
    }

    #[test]
    fn invalid_records() {
        for text in [
            "1 3\n0 3 1\n",
            "1 3\n1 1 1\n",
            "1 3\n0 1 0\n",
            "1 3\n0 1\n",
            "1 3\n0 -1 4\n",
        ] {
            let res: Result<Graph> = text.parse();
            assert!(
                matches!(res, Err(GraphError::Format { line: 2, .. })),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn missing_file() {
        let res = Graph::load_from_file("/nonexistent/graph.txt");
        assert!(matches!(res, Err(GraphError::Io(_))));
    }
}
