use crate::error::{Result, RitualError};
use crate::graph::algos::shared::reconstruct_path;
use crate::graph::store::Graph;
use crate::graph::types::{NodeId, SearchStats};
use crate::{log_search_stats, trace_time};
use std::time::Instant;

/// Best accumulated victim values and their predecessor tree from one source node
#[derive(Debug, Clone)]
pub struct MaxValuePaths {
    source: NodeId,
    accumulated: Vec<Option<i64>>,
    predecessor: Vec<Option<NodeId>>,
    stats: SearchStats,
    budget_exhausted: bool,
}

impl MaxValuePaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Per-node accumulated value, `None` where unreached
    pub fn values(&self) -> &[Option<i64>] {
        &self.accumulated
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessor
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// True when the round budget ran out while some edge could still improve
    /// its destination.
    ///
    /// This happens on positive-value cycles reachable from the source; the
    /// reported values then depend on the round budget.
    pub fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }

    /// Accumulated victims on the best route to `destination`, `None` if unreachable
    pub fn max_value_to(&self, destination: NodeId) -> Result<Option<i64>> {
        self.check_node(destination)?;
        Ok(self.accumulated[destination])
    }

    /// Route to `destination` following the predecessor tree, empty if unreachable.
    ///
    /// The walk is capped at `node_count + 1` nodes since positive cycles can
    /// leave a loop in the predecessor chain.
    pub fn path_to(&self, destination: NodeId) -> Result<Vec<NodeId>> {
        self.check_node(destination)?;
        if self.accumulated[destination].is_none() {
            return Ok(Vec::new());
        }

        let (path, truncated) =
            reconstruct_path(&self.predecessor, destination, self.accumulated.len());
        if truncated {
            tracing::warn!(
                destination,
                length = path.len(),
                "predecessor chain loops; path cut at safety bound"
            );
        }
        Ok(path)
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.accumulated.len() {
            Ok(())
        } else {
            Err(RitualError::out_of_range(
                "destination node",
                node,
                self.accumulated.len(),
            ))
        }
    }
}

/// Maximise accumulated victim values from `source` by bounded edge relaxation.
///
/// Bellman-Ford turned around: for up to `node_count - 1` rounds every edge
/// `(u, v)` with `u` reached offers `value(u) + victims[v]` to `v`, and the
/// larger offer wins. Edge weights are ignored. A round with no improvement
/// ends the search early.
///
/// Victims are added on every traversal with no per-path visited set, so a
/// positive-value cycle keeps growing until the round budget runs out. The
/// result is exact on acyclic graphs and round-bounded otherwise.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn max_value_paths(graph: &Graph, source: NodeId) -> Result<MaxValuePaths> {
    graph.check_node(source, "source node")?;
    let start = Instant::now();

    let n = graph.node_count();
    let victims = graph.values();
    let mut accumulated: Vec<Option<i64>> = vec![None; n];
    let mut predecessor: Vec<Option<NodeId>> = vec![None; n];
    let mut stats = SearchStats::default();
    let mut last_round_updated = false;

    accumulated[source] = Some(0);

    for round in 1..n {
        let mut updated = false;

        for edge in graph.edges() {
            let Some(reached) = accumulated[edge.source] else {
                continue;
            };

            let candidate = reached.saturating_add(victims[edge.destination]);
            if accumulated[edge.destination].is_none_or(|best| candidate > best) {
                accumulated[edge.destination] = Some(candidate);
                predecessor[edge.destination] = Some(edge.source);
                stats.relaxations += 1;
                updated = true;
            }
        }

        stats.rounds = round;
        tracing::trace!(round, updated, "relaxation_round");

        last_round_updated = updated;
        if !updated {
            break;
        }
    }

    let budget_exhausted = last_round_updated && has_improving_edge(graph, &accumulated);
    if budget_exhausted {
        tracing::warn!(
            rounds = stats.rounds,
            "values still rising after the last round; a positive cycle is reachable"
        );
    }

    log_search_stats!(&stats, "max_value_paths");
    trace_time!(start, "max_value_paths");

    Ok(MaxValuePaths {
        source,
        accumulated,
        predecessor,
        stats,
        budget_exhausted,
    })
}

/// Extra check pass: would any edge still improve its destination?
fn has_improving_edge(graph: &Graph, accumulated: &[Option<i64>]) -> bool {
    let victims = graph.values();
    graph.edges().iter().any(|edge| {
        accumulated[edge.source].is_some_and(|reached| {
            let candidate = reached.saturating_add(victims[edge.destination]);
            accumulated[edge.destination].is_none_or(|best| candidate > best)
        })
    })
}
