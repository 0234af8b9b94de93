//! Human-readable output formatting for route command

use crate::cli::Cli;
use ritual_core::route::{Algorithm, RouteComparison, RouteSummary};

/// Output in human-readable format
pub fn output_human(cli: &Cli, comparison: &RouteComparison) {
    if !cli.quiet {
        print_section(&comparison.shortest);
        println!();
        print_section(&comparison.most_victims);
        println!();
    }

    print!("{}", summary_table(comparison));
}

fn section_title(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Dijkstra => "Shortest route",
        Algorithm::BellmanFord => "Most victims",
    }
}

fn print_section(route: &RouteSummary) {
    println!("{} ({})", section_title(route.algorithm), route.algorithm);
    if !route.found {
        println!("  no path");
        return;
    }

    println!("  Nodes:    {}", format_path(&route.path));
    if let Some(distance) = route.distance {
        println!("  Distance: {}", distance);
    }
    if let Some(victims) = route.victims {
        println!("  Victims:  {}", victims);
    }
}

fn format_path(path: &[usize]) -> String {
    format!("{:?}", path)
}

/// Unreachable routes show `[]` with -1 for both metrics
fn summary_table(comparison: &RouteComparison) -> String {
    let mut out = format!(
        "{:<12} | {:<20} | {:<4} | {}\n",
        "Algorithm", "Path", "Dist", "Victims"
    );
    out.push_str(&"-".repeat(50));
    out.push('\n');

    for route in comparison.routes() {
        out.push_str(&format!(
            "{:<12} | {:<20} | {:<4} | {}\n",
            route.algorithm.to_string(),
            format_path(&route.path),
            route.distance.unwrap_or(-1),
            route.victims.unwrap_or(-1)
        ));
    }
    out
}
