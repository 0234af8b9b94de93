//! `ritual route` command - compare the shortest and the most-victims route
//!
//! - graph from a file, from stdin (`-`) or the built-in example
//! - `--start` / `--end` fall back to `[route]` in the config file
//! - human, json and records output

pub mod format;

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use ritual_core::bail_usage;
use ritual_core::config::RitualConfig;
use ritual_core::error::{Result, RitualError};
use ritual_core::format::OutputFormat;
use ritual_core::graph::{Graph, NodeId};
use ritual_core::input::{example_graph, parse_graph, EXAMPLE_END, EXAMPLE_START};
use ritual_core::route::{compare_routes, RouteRequest};

use self::format::{output_human, output_json, output_records};

/// Where the graph text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    File(PathBuf),
    Stdin,
    Example,
}

impl GraphSource {
    /// Map the positional INPUT argument, `-` meaning stdin
    pub fn from_arg(input: Option<&Path>) -> Result<Self> {
        match input {
            Some(path) if path == Path::new("-") => Ok(GraphSource::Stdin),
            Some(path) => Ok(GraphSource::File(path.to_path_buf())),
            None => bail_usage!("route needs an INPUT file, `-` for stdin, or --example"),
        }
    }

    fn load(&self) -> Result<Graph> {
        match self {
            GraphSource::Example => example_graph(),
            GraphSource::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                parse_graph(&text)
            }
            GraphSource::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    RitualError::Other(format!(
                        "failed to read graph from {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                parse_graph(&text)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteArgs {
    pub source: GraphSource,
    pub start: Option<NodeId>,
    pub end: Option<NodeId>,
}

/// Execute the route command
pub fn execute(
    cli: &Cli,
    config: &RitualConfig,
    format: OutputFormat,
    args: &RouteArgs,
) -> Result<()> {
    let request = resolve_request(args, config)?;
    let graph = args.source.load()?;

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        start = request.start,
        end = request.end,
        "loaded graph"
    );

    let comparison = compare_routes(&graph, request)?;

    match format {
        OutputFormat::Human => output_human(cli, &comparison),
        OutputFormat::Json => output_json(&comparison)?,
        OutputFormat::Records => output_records(&comparison),
    }

    Ok(())
}

/// Flags win over the config file; the example supplies its own endpoints
fn resolve_request(args: &RouteArgs, config: &RitualConfig) -> Result<RouteRequest> {
    let example = args.source == GraphSource::Example;

    let start = args
        .start
        .or(config.route.start)
        .or(example.then_some(EXAMPLE_START));
    let end = args
        .end
        .or(config.route.end)
        .or(example.then_some(EXAMPLE_END));

    match (start, end) {
        (Some(start), Some(end)) => Ok(RouteRequest::new(start, end)),
        (None, _) => bail_usage!("no start node: pass --start or set route.start in the config"),
        (_, None) => bail_usage!("no end node: pass --end or set route.end in the config"),
    }
}
