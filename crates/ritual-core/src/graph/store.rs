//! Directed weighted settlement graph
//!
//! The graph is built once from a sequence of edges and is read-only while
//! searches run. Victim values live on nodes but arrive on edges: each edge
//! declares the value of its destination, and the most recently added edge
//! into a node wins.

use crate::bail_invalid;
use crate::error::{Result, RitualError};
use crate::graph::types::{Edge, Neighbor, NodeId};

#[derive(Debug, Clone)]
pub struct Graph {
    values: Vec<i64>,
    adjacency: Vec<Vec<Neighbor>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph with `node_count` nodes, no edges and all values zero.
    ///
    /// Allocation is fallible so an absurd count is an `InvalidArgument`
    /// rather than an abort.
    pub fn new(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            bail_invalid!("node count", "0 (a graph needs at least one node)");
        }

        let too_large = |_| {
            RitualError::invalid_argument(
                "node count",
                format!("{node_count} (too large to allocate)"),
            )
        };

        let mut values = Vec::new();
        values.try_reserve_exact(node_count).map_err(too_large)?;
        values.resize(node_count, 0);

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(node_count).map_err(too_large)?;
        adjacency.resize_with(node_count, Vec::new);

        Ok(Graph {
            values,
            adjacency,
            edges: Vec::new(),
        })
    }

    /// Add a directed edge and overwrite the destination's victim value.
    ///
    /// Both ids are validated before anything is mutated.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        destination: NodeId,
        weight: i64,
        destination_value: i64,
    ) -> Result<()> {
        self.check_node(source, "edge source")?;
        self.check_node(destination, "edge destination")?;

        self.adjacency[source].push(Neighbor {
            to: destination,
            weight,
        });
        self.edges.push(Edge {
            source,
            destination,
            weight,
        });
        self.values[destination] = destination_value;

        Ok(())
    }

    /// Fail with `OutOfRange` unless `node` lies in `[0, node_count)`
    pub fn check_node(&self, node: NodeId, context: &str) -> Result<()> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(RitualError::out_of_range(context, node, self.node_count()))
        }
    }

    pub fn node_count(&self) -> usize {
        self.values.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Victim values indexed by node id
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Victim value of a single node
    pub fn value(&self, node: NodeId) -> Result<i64> {
        self.check_node(node, "node")?;
        Ok(self.values[node])
    }

    /// Outgoing edges of `node` in insertion order
    pub fn neighbors(&self, node: NodeId) -> Result<&[Neighbor]> {
        self.check_node(node, "node")?;
        Ok(&self.adjacency[node])
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Unchecked adjacency access for ids already validated by the caller
    pub(crate) fn adjacency(&self) -> &[Vec<Neighbor>] {
        &self.adjacency
    }
}
