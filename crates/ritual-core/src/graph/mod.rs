//! Settlement graph and route searches
//!
//! Provides the graph store and the two competing searches over it:
//! - Dijkstra search for the minimum-distance route
//! - Bounded Bellman-Ford relaxation for the maximum-victim route
//! - Path reconstruction and path metric helpers shared by both

pub mod algos;
pub mod store;
pub mod types;

pub use algos::{
    compute_distance, count_victims, is_contiguous, max_value_paths, shortest_paths,
    MaxValuePaths, ShortestPaths,
};
pub use store::Graph;
pub use types::{Edge, Neighbor, NodeId, SearchStats};
