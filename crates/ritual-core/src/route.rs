//! Route comparison
//!
//! Runs both searches from the same start node and summarises, for each,
//! the route to the end node with its total distance and collected victims.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{
    compute_distance, count_victims, is_contiguous, max_value_paths, shortest_paths, Graph,
    NodeId,
};

/// Which search produced a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Minimum total distance
    Dijkstra,
    /// Maximum collected victims
    BellmanFord,
}

impl Algorithm {
    /// Machine-readable name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "Dijkstra"),
            Algorithm::BellmanFord => write!(f, "Bellman-Ford"),
        }
    }
}

/// Start and end settlements for a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: NodeId,
    pub end: NodeId,
}

impl RouteRequest {
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self { start, end }
    }

    /// Both endpoints must exist before either search runs
    pub fn validate(&self, graph: &Graph) -> Result<()> {
        graph.check_node(self.start, "start node")?;
        graph.check_node(self.end, "end node")
    }
}

/// One search's route to the end node.
///
/// An empty path means the end node is unreachable; the metrics are then `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub algorithm: Algorithm,
    pub found: bool,
    pub path: Vec<NodeId>,
    pub distance: Option<i64>,
    pub victims: Option<i64>,
}

impl RouteSummary {
    fn unreachable(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            found: false,
            path: Vec::new(),
            distance: None,
            victims: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteComparison {
    pub start: NodeId,
    pub end: NodeId,
    pub nodes: usize,
    pub edges: usize,
    pub shortest: RouteSummary,
    pub most_victims: RouteSummary,
}

impl RouteComparison {
    /// Both summaries, shortest first
    pub fn routes(&self) -> [&RouteSummary; 2] {
        [&self.shortest, &self.most_victims]
    }
}

/// Shortest route, its distance and the distinct victims along it
pub fn shortest_route(graph: &Graph, request: RouteRequest) -> Result<RouteSummary> {
    let paths = shortest_paths(graph, request.start)?;
    let path = paths.path_to(request.end)?;
    if path.is_empty() {
        return Ok(RouteSummary::unreachable(Algorithm::Dijkstra));
    }
    debug_assert!(is_contiguous(graph, &path));

    Ok(RouteSummary {
        algorithm: Algorithm::Dijkstra,
        found: true,
        distance: paths.distance_to(request.end)?,
        victims: Some(count_victims(graph, &path)?),
        path,
    })
}

/// Route with the most accumulated victims and the distance along it
pub fn most_victims_route(graph: &Graph, request: RouteRequest) -> Result<RouteSummary> {
    let paths = max_value_paths(graph, request.start)?;
    let path = paths.path_to(request.end)?;
    if path.is_empty() {
        return Ok(RouteSummary::unreachable(Algorithm::BellmanFord));
    }
    debug_assert!(is_contiguous(graph, &path));

    Ok(RouteSummary {
        algorithm: Algorithm::BellmanFord,
        found: true,
        distance: Some(compute_distance(graph, &path)?),
        victims: paths.max_value_to(request.end)?,
        path,
    })
}

/// Validate the request, then run both searches independently
#[tracing::instrument(skip(graph), fields(start = request.start, end = request.end))]
pub fn compare_routes(graph: &Graph, request: RouteRequest) -> Result<RouteComparison> {
    request.validate(graph)?;

    let shortest = shortest_route(graph, request)?;
    let most_victims = most_victims_route(graph, request)?;

    tracing::debug!(
        shortest_found = shortest.found,
        most_victims_found = most_victims.found,
        "compared routes"
    );

    Ok(RouteComparison {
        start: request.start,
        end: request.end,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        shortest,
        most_victims,
    })
}
