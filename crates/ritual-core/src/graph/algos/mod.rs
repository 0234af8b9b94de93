//! Route search implementations
//!
//! Contains the two searches over a settlement graph:
//! - `dijkstra`: minimum total distance from one source
//! - `max_value`: maximum accumulated victims from one source
//! - `shared`: path reconstruction and path metrics used by both

pub mod dijkstra;
pub mod max_value;
pub mod shared;

pub use dijkstra::{shortest_paths, ShortestPaths};
pub use max_value::{max_value_paths, MaxValuePaths};
pub use shared::{compute_distance, count_victims, is_contiguous, reconstruct_path};

#[cfg(test)]
pub(crate) mod test_support;
