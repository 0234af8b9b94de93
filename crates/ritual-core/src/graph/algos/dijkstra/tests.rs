use super::*;
use crate::error::RitualError;
use crate::graph::algos::shared::{compute_distance, count_victims, is_contiguous};
use crate::graph::algos::test_support::{brute_force_distances, random_graph, Lcg};
use crate::input::{example_graph, parse_graph};

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node: 0,
        distance: 1,
    };
    let entry2 = HeapEntry {
        node: 1,
        distance: 2,
    };
    let entry3 = HeapEntry {
        node: 2,
        distance: 1,
    };

    // Lower distance should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal distances fall back to node id
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry2);
}

/// Reverse wrapping pops the smallest distance first
#[test]
fn test_heap_pops_minimum() {
    let mut heap = BinaryHeap::new();
    for (node, distance) in [(0, 10), (1, 3), (2, 7)] {
        heap.push(Reverse(HeapEntry { node, distance }));
    }

    let Reverse(first) = heap.pop().unwrap();
    assert_eq!(first.node, 1);
    assert_eq!(first.distance, 3);
}

#[test]
fn test_example_shortest_route() {
    let graph = example_graph().unwrap();
    let paths = shortest_paths(&graph, 0).unwrap();

    let path = paths.path_to(6).unwrap();
    assert_eq!(path, vec![0, 1, 3, 5, 6]);
    assert_eq!(paths.distance_to(6).unwrap(), Some(14));
    assert_eq!(count_victims(&graph, &path).unwrap(), 12);

    assert_eq!(
        paths.distances(),
        &[
            Some(0),
            Some(4),
            Some(2),
            Some(9),
            Some(12),
            Some(11),
            Some(14)
        ]
    );
}

#[test]
fn test_source_path_is_single_node() {
    let graph = example_graph().unwrap();
    let paths = shortest_paths(&graph, 2).unwrap();

    assert_eq!(paths.source(), 2);
    assert_eq!(paths.path_to(2).unwrap(), vec![2]);
    assert_eq!(paths.distance_to(2).unwrap(), Some(0));
    assert_eq!(paths.predecessors()[2], None);
}

#[test]
fn test_unreachable_nodes() {
    let graph = example_graph().unwrap();
    let paths = shortest_paths(&graph, 5).unwrap();

    assert_eq!(paths.distance_to(0).unwrap(), None);
    assert!(paths.path_to(0).unwrap().is_empty());
    assert_eq!(paths.path_to(6).unwrap(), vec![5, 6]);
}

#[test]
fn test_out_of_range_nodes() {
    let graph = example_graph().unwrap();
    assert!(matches!(
        shortest_paths(&graph, 7),
        Err(RitualError::OutOfRange { node: 7, .. })
    ));

    let paths = shortest_paths(&graph, 0).unwrap();
    assert!(paths.path_to(7).is_err());
    assert!(paths.distance_to(100).is_err());
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = Graph::new(3).unwrap();
    graph.add_edge(0, 1, 0, 1).unwrap();
    graph.add_edge(1, 0, 0, 0).unwrap();
    graph.add_edge(1, 2, 0, 2).unwrap();

    let paths = shortest_paths(&graph, 0).unwrap();
    assert_eq!(paths.path_to(2).unwrap(), vec![0, 1, 2]);
    assert_eq!(paths.distance_to(2).unwrap(), Some(0));
    // the zero-weight edge back to the source never replaces its root
    assert_eq!(paths.predecessors()[0], None);
}

#[test]
fn test_negative_weights_rejected() {
    // a two-node negative cycle would never drain the frontier
    let graph = parse_graph("2 2\n0 1 -1 0\n1 0 -1 0").unwrap();
    let err = shortest_paths(&graph, 0).unwrap_err();

    assert!(matches!(err, RitualError::InvalidArgument { .. }));
    assert!(err.to_string().contains("-1 on edge 0 -> 1"));
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let mut graph = Graph::new(2).unwrap();
    graph.add_edge(0, 1, 9, 0).unwrap();
    graph.add_edge(0, 1, 2, 0).unwrap();

    let paths = shortest_paths(&graph, 0).unwrap();
    assert_eq!(paths.distance_to(1).unwrap(), Some(2));
}

#[test]
fn test_stale_entries_skipped() {
    // node 2 is queued at 10, then improved to 3 through node 1
    let mut graph = Graph::new(3).unwrap();
    graph.add_edge(0, 2, 10, 0).unwrap();
    graph.add_edge(0, 1, 1, 0).unwrap();
    graph.add_edge(1, 2, 2, 0).unwrap();

    let paths = shortest_paths(&graph, 0).unwrap();
    assert_eq!(paths.distance_to(2).unwrap(), Some(3));

    let stats = paths.stats();
    assert_eq!(stats.relaxations, 3);
    assert_eq!(stats.pops, 4);
    assert_eq!(stats.stale_skipped, 1);
}

#[test]
fn test_victims_counted_once_on_revisits() {
    let graph = example_graph().unwrap();
    assert_eq!(count_victims(&graph, &[0, 1, 3, 1, 3]).unwrap(), 8);
}

/// Compare against simple-path enumeration on small random graphs
#[test]
fn test_matches_brute_force() {
    let mut rng = Lcg::new(0x5eed);

    for _ in 0..200 {
        let node_count = 1 + rng.below(7);
        let edge_count = rng.below(14);
        let graph = random_graph(&mut rng, node_count, edge_count, false);
        let source = rng.below(node_count);

        let paths = shortest_paths(&graph, source).unwrap();
        let expected = brute_force_distances(&graph, source);
        assert_eq!(paths.distances(), expected.as_slice());

        for destination in 0..node_count {
            let path = paths.path_to(destination).unwrap();
            match paths.distance_to(destination).unwrap() {
                None => assert!(path.is_empty()),
                Some(distance) => {
                    assert_eq!(path.first(), Some(&source));
                    assert_eq!(path.last(), Some(&destination));
                    assert!(is_contiguous(&graph, &path));
                    // first-match lookup can pick a heavier parallel edge
                    assert!(compute_distance(&graph, &path).unwrap() >= distance);
                }
            }
        }
    }
}
