//! JSON output formatting for route command

use ritual_core::error::Result;
use ritual_core::route::RouteComparison;

/// Output in JSON format
pub fn output_json(comparison: &RouteComparison) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(comparison)?);
    Ok(())
}
