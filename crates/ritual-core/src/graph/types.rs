use serde::Serialize;

/// Settlement identifier, an index in `[0, node_count)`
pub type NodeId = usize;

/// Outgoing adjacency entry: destination and edge weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub to: NodeId,
    pub weight: i64,
}

/// Directed weighted edge as stored in the flat edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub destination: NodeId,
    pub weight: i64,
}

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Frontier entries popped (shortest-path search only)
    pub pops: usize,
    /// Popped entries skipped because a shorter distance was already recorded
    pub stale_skipped: usize,
    /// Successful relaxations
    pub relaxations: usize,
    /// Relaxation rounds actually run (maximum-value search only)
    pub rounds: usize,
}
