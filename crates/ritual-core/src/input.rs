//! Graph text reader
//!
//! Reads the whitespace-separated format `n m` followed by `m` edges
//! `u v d c`: source, destination, distance and the victims found at the
//! destination. Line breaks carry no meaning.

use std::str::SplitWhitespace;

use crate::bail_input;
use crate::error::{Result, RitualError};
use crate::graph::{Graph, NodeId};

/// The worked example: 7 settlements, 8 roads, start 0, end 6
pub const EXAMPLE_GRAPH: &str = "7 8
0 1 4 3
0 2 2 0
1 3 5 5
2 3 8 5
2 4 10 1
3 5 2 4
5 6 3 0
4 5 2 4
";

pub const EXAMPLE_START: NodeId = 0;
pub const EXAMPLE_END: NodeId = 6;

/// Build the worked example graph
pub fn example_graph() -> Result<Graph> {
    parse_graph(EXAMPLE_GRAPH)
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_int(&mut self, field: &str) -> Result<i64> {
        let Some(token) = self.inner.next() else {
            bail_input!("missing {field}");
        };
        token
            .parse::<i64>()
            .map_err(|e| RitualError::invalid_input(format!("{field} {token:?}: {e}")))
    }

    fn next_count(&mut self, field: &str) -> Result<usize> {
        let value = self.next_int(field)?;
        usize::try_from(value).map_err(|_| RitualError::invalid_argument(field, value))
    }

    fn next_node(&mut self, field: &str, node_count: usize) -> Result<NodeId> {
        let node = self.next_count(field)?;
        if node >= node_count {
            return Err(RitualError::OutOfRange {
                context: field.to_string(),
                node,
                node_count,
            });
        }
        Ok(node)
    }
}

/// Parse a graph from `n m` / `u v d c` text
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_graph(text: &str) -> Result<Graph> {
    let mut tokens = Tokens::new(text);

    let node_count = tokens.next_count("node count")?;
    let edge_count = tokens.next_count("edge count")?;
    let mut graph = Graph::new(node_count)?;

    for index in 0..edge_count {
        let source = tokens.next_node(&format!("edge {index} source"), node_count)?;
        let destination = tokens.next_node(&format!("edge {index} destination"), node_count)?;
        let weight = tokens.next_int(&format!("edge {index} distance"))?;
        let victims = tokens.next_int(&format!("edge {index} victims"))?;
        graph.add_edge(source, destination, weight, victims)?;
    }

    if let Some(extra) = tokens.inner.next() {
        bail_input!("unexpected token {extra:?} after {edge_count} edges");
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed graph"
    );
    Ok(graph)
}
