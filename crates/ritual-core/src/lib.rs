//! Ritual Core Library
//!
//! Route search over directed settlement graphs: the shortest route between
//! two settlements, and the route that collects the most victims.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;
pub mod logging;
pub mod route;
