//! Deterministic graph generation and brute-force oracles for search tests

use crate::graph::{Graph, NodeId};

/// Fixed-seed linear congruential generator
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    pub fn below(&mut self, bound: usize) -> usize {
        self.next_u32() as usize % bound
    }
}

/// Random graph with weights in `0..10` and values in `0..6`.
///
/// With `acyclic`, every edge points from a lower id to a higher id.
pub fn random_graph(rng: &mut Lcg, node_count: usize, edge_count: usize, acyclic: bool) -> Graph {
    let mut graph = Graph::new(node_count).unwrap();
    for _ in 0..edge_count {
        let (source, destination) = if acyclic {
            let source = rng.below(node_count - 1);
            let destination = source + 1 + rng.below(node_count - 1 - source);
            (source, destination)
        } else {
            (rng.below(node_count), rng.below(node_count))
        };
        let weight = rng.below(10) as i64;
        let value = rng.below(6) as i64;
        graph.add_edge(source, destination, weight, value).unwrap();
    }
    graph
}

/// Minimum distance to every node over all simple paths from `source`
pub fn brute_force_distances(graph: &Graph, source: NodeId) -> Vec<Option<i64>> {
    fn walk(
        graph: &Graph,
        node: NodeId,
        distance: i64,
        on_path: &mut [bool],
        best: &mut [Option<i64>],
    ) {
        if best[node].is_none_or(|current| distance < current) {
            best[node] = Some(distance);
        }
        on_path[node] = true;
        for neighbor in graph.neighbors(node).unwrap() {
            if !on_path[neighbor.to] {
                walk(graph, neighbor.to, distance + neighbor.weight, on_path, best);
            }
        }
        on_path[node] = false;
    }

    let mut best = vec![None; graph.node_count()];
    let mut on_path = vec![false; graph.node_count()];
    walk(graph, source, 0, &mut on_path, &mut best);
    best
}

/// Maximum victim sum over all paths from `source` in an acyclic graph.
///
/// The source contributes nothing; every later node on the path contributes its value.
pub fn brute_force_max_values(graph: &Graph, source: NodeId) -> Vec<Option<i64>> {
    fn walk(graph: &Graph, node: NodeId, collected: i64, best: &mut [Option<i64>]) {
        if best[node].is_none_or(|current| collected > current) {
            best[node] = Some(collected);
        }
        for neighbor in graph.neighbors(node).unwrap() {
            let value = graph.value(neighbor.to).unwrap();
            walk(graph, neighbor.to, collected + value, best);
        }
    }

    let mut best = vec![None; graph.node_count()];
    walk(graph, source, 0, &mut best);
    best
}

/// Literal `node_count - 1` round edge relaxation with an integer sentinel
pub fn bounded_relaxation(graph: &Graph, source: NodeId) -> Vec<Option<i64>> {
    const UNREACHED: i64 = i64::MIN;
    let n = graph.node_count();
    let mut best = vec![UNREACHED; n];
    best[source] = 0;

    for _ in 1..n {
        for edge in graph.edges() {
            if best[edge.source] == UNREACHED {
                continue;
            }
            let candidate = best[edge.source] + graph.values()[edge.destination];
            if candidate > best[edge.destination] {
                best[edge.destination] = candidate;
            }
        }
    }

    best.into_iter()
        .map(|value| (value != UNREACHED).then_some(value))
        .collect()
}
