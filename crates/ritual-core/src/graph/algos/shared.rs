//! Path reconstruction and path metrics shared by both searches

use std::collections::HashSet;

use crate::error::{Result, RitualError};
use crate::graph::store::Graph;
use crate::graph::types::NodeId;

/// Walk `predecessor` backward from `destination` and return the path in
/// source-to-destination order.
///
/// The walk stops at the first node without a predecessor, or once the path
/// holds more than `limit` nodes. The flag is true when the limit cut the
/// walk short, which only happens on a cyclic predecessor chain.
pub fn reconstruct_path(
    predecessor: &[Option<NodeId>],
    destination: NodeId,
    limit: usize,
) -> (Vec<NodeId>, bool) {
    let mut path = Vec::new();
    let mut current = Some(destination);
    let mut truncated = false;

    while let Some(node) = current {
        path.push(node);
        if path.len() > limit {
            truncated = true;
            break;
        }
        current = predecessor.get(node).copied().flatten();
    }

    path.reverse();
    (path, truncated)
}

/// Sum victim values over `path`, counting each distinct node once
pub fn count_victims(graph: &Graph, path: &[NodeId]) -> Result<i64> {
    let values = graph.values();
    let mut seen = HashSet::with_capacity(path.len());
    let mut total: i64 = 0;

    for &node in path {
        graph.check_node(node, "path node")?;
        if seen.insert(node) {
            total = total.saturating_add(values[node]);
        }
    }

    Ok(total)
}

/// Total edge weight along `path`.
///
/// For each consecutive pair the first matching adjacency entry is used, so
/// parallel edges resolve to the one added first. Paths shorter than two
/// nodes have distance 0. A pair with no edge between them fails with
/// `EdgeNotFound`.
pub fn compute_distance(graph: &Graph, path: &[NodeId]) -> Result<i64> {
    for &node in path {
        graph.check_node(node, "path node")?;
    }

    let adjacency = graph.adjacency();
    let mut total: i64 = 0;

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let weight = adjacency[from]
            .iter()
            .find(|neighbor| neighbor.to == to)
            .map(|neighbor| neighbor.weight)
            .ok_or(RitualError::EdgeNotFound { from, to })?;
        total = total.saturating_add(weight);
    }

    Ok(total)
}

/// True when every consecutive pair of `path` is joined by an edge
pub fn is_contiguous(graph: &Graph, path: &[NodeId]) -> bool {
    compute_distance(graph, path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> Graph {
        let mut graph = Graph::new(4).unwrap();
        graph.add_edge(0, 1, 4, 3).unwrap();
        graph.add_edge(1, 2, 5, 5).unwrap();
        graph.add_edge(2, 3, 2, 4).unwrap();
        graph
    }

    #[test]
    fn test_reconstruct_path_walks_to_root() {
        let predecessor = vec![None, Some(0), Some(1), Some(2)];
        let (path, truncated) = reconstruct_path(&predecessor, 3, 4);
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert!(!truncated);
    }

    #[test]
    fn test_reconstruct_path_of_root_is_single_node() {
        let predecessor = vec![None, Some(0)];
        let (path, _) = reconstruct_path(&predecessor, 0, 2);
        assert_eq!(path, vec![0]);
    }

    #[test]
    fn test_reconstruct_path_stops_on_cycle() {
        // 1 <-> 2 loop with no root
        let predecessor = vec![None, Some(2), Some(1)];
        let (path, truncated) = reconstruct_path(&predecessor, 2, 3);
        assert!(truncated);
        assert_eq!(path, vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_count_victims_deduplicates() {
        let graph = line_graph();
        assert_eq!(count_victims(&graph, &[0, 1, 2, 3]).unwrap(), 12);
        assert_eq!(count_victims(&graph, &[1, 2, 1, 2, 1]).unwrap(), 8);
        assert_eq!(count_victims(&graph, &[]).unwrap(), 0);
    }

    #[test]
    fn test_count_victims_rejects_unknown_node() {
        let graph = line_graph();
        assert!(matches!(
            count_victims(&graph, &[0, 9]),
            Err(RitualError::OutOfRange { node: 9, .. })
        ));
    }

    #[test]
    fn test_compute_distance_short_paths() {
        let graph = line_graph();
        assert_eq!(compute_distance(&graph, &[]).unwrap(), 0);
        assert_eq!(compute_distance(&graph, &[2]).unwrap(), 0);
        assert_eq!(compute_distance(&graph, &[0, 1, 2, 3]).unwrap(), 11);
    }

    #[test]
    fn test_compute_distance_first_parallel_edge_wins() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_edge(0, 1, 9, 0).unwrap();
        graph.add_edge(0, 1, 1, 0).unwrap();
        assert_eq!(compute_distance(&graph, &[0, 1]).unwrap(), 9);
    }

    #[test]
    fn test_compute_distance_missing_edge() {
        let graph = line_graph();
        let err = compute_distance(&graph, &[0, 1, 3]).unwrap_err();
        assert!(matches!(err, RitualError::EdgeNotFound { from: 1, to: 3 }));
        assert!(!is_contiguous(&graph, &[3, 2]));
        assert!(is_contiguous(&graph, &[1, 2, 3]));
    }
}
