//! Records output formatting for route command

use ritual_core::route::{RouteComparison, RouteSummary};

/// Output in records format
pub fn output_records(comparison: &RouteComparison) {
    println!(
        "H ritual=1 records=1 mode=route start={} end={} nodes={} edges={}",
        comparison.start, comparison.end, comparison.nodes, comparison.edges
    );

    for route in comparison.routes() {
        println!("{}", route_record(route));
    }
}

fn route_record(route: &RouteSummary) -> String {
    let path = if route.path.is_empty() {
        "-".to_string()
    } else {
        route
            .path
            .iter()
            .map(|node| node.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };

    format!(
        "R algorithm={} found={} distance={} victims={} path={}",
        route.algorithm.as_str(),
        route.found,
        metric(route.distance),
        metric(route.victims),
        path
    )
}

fn metric(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
