use crate::error::{Result, RitualError};
use crate::graph::algos::shared::reconstruct_path;
use crate::graph::store::Graph;
use crate::graph::types::{NodeId, SearchStats};
use crate::{log_search_stats, trace_time};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node: NodeId,
    pub distance: i64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.distance == other.distance
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// State tracked during Dijkstra search
struct DijkstraState {
    distance: Vec<Option<i64>>,
    predecessor: Vec<Option<NodeId>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    stats: SearchStats,
}

impl DijkstraState {
    fn new(node_count: usize) -> Self {
        Self {
            distance: vec![None; node_count],
            predecessor: vec![None; node_count],
            heap: BinaryHeap::new(),
            stats: SearchStats::default(),
        }
    }

    /// A popped entry is stale when a shorter distance was recorded after it was pushed
    fn is_stale(&self, entry: &HeapEntry) -> bool {
        self.distance[entry.node].is_some_and(|best| entry.distance > best)
    }
}

/// Minimum distances and the shortest-path tree from one source node
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: NodeId,
    distance: Vec<Option<i64>>,
    predecessor: Vec<Option<NodeId>>,
    stats: SearchStats,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Per-node minimum distance, `None` where unreached
    pub fn distances(&self) -> &[Option<i64>] {
        &self.distance
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessor
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimum total weight from the source to `destination`, `None` if unreachable
    pub fn distance_to(&self, destination: NodeId) -> Result<Option<i64>> {
        self.check_node(destination)?;
        Ok(self.distance[destination])
    }

    /// Shortest route from the source to `destination`, empty if unreachable
    pub fn path_to(&self, destination: NodeId) -> Result<Vec<NodeId>> {
        self.check_node(destination)?;
        if self.distance[destination].is_none() {
            return Ok(Vec::new());
        }

        let (path, _) = reconstruct_path(&self.predecessor, destination, self.distance.len());
        Ok(path)
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.distance.len() {
            Ok(())
        } else {
            Err(RitualError::out_of_range(
                "destination node",
                node,
                self.distance.len(),
            ))
        }
    }
}

/// Run Dijkstra's search from `source` over the whole graph.
///
/// The frontier uses lazy deletion: a node may be queued several times and
/// only the entry matching its current best distance is expanded.
///
/// Negative edge weights are rejected with `InvalidArgument`; a negative
/// cycle would otherwise keep re-queueing nodes.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn shortest_paths(graph: &Graph, source: NodeId) -> Result<ShortestPaths> {
    graph.check_node(source, "source node")?;
    let start = Instant::now();

    if let Some(edge) = graph.edges().iter().find(|edge| edge.weight < 0) {
        return Err(RitualError::invalid_argument(
            "edge weight",
            format!(
                "{} on edge {} -> {} (shortest paths need non-negative weights)",
                edge.weight, edge.source, edge.destination
            ),
        ));
    }

    let adjacency = graph.adjacency();
    let mut state = DijkstraState::new(graph.node_count());
    state.distance[source] = Some(0);
    state.heap.push(Reverse(HeapEntry {
        node: source,
        distance: 0,
    }));

    // Main Dijkstra loop
    while let Some(Reverse(entry)) = state.heap.pop() {
        state.stats.pops += 1;

        if state.is_stale(&entry) {
            state.stats.stale_skipped += 1;
            continue;
        }

        for neighbor in &adjacency[entry.node] {
            let candidate = entry.distance.saturating_add(neighbor.weight);
            let improves = state.distance[neighbor.to].is_none_or(|best| candidate < best);

            if improves {
                state.distance[neighbor.to] = Some(candidate);
                state.predecessor[neighbor.to] = Some(entry.node);
                state.stats.relaxations += 1;
                state.heap.push(Reverse(HeapEntry {
                    node: neighbor.to,
                    distance: candidate,
                }));
            }
        }
    }

    log_search_stats!(&state.stats, "shortest_paths");
    trace_time!(start, "shortest_paths");

    Ok(ShortestPaths {
        source,
        distance: state.distance,
        predecessor: state.predecessor,
        stats: state.stats,
    })
}

#[cfg(test)]
mod tests;
