//! Command dispatch logic for ritual
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::route::{GraphSource, RouteArgs};
use ritual_core::config::RitualConfig;
use ritual_core::error::Result;
use ritual_core::format::OutputFormat;

pub fn run(cli: &Cli, config: &RitualConfig, format: OutputFormat, start: Instant) -> Result<()> {
    tracing::debug!(elapsed = ?start.elapsed(), format = %format, "resolve_config");

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Route {
            input,
            example,
            start: start_node,
            end: end_node,
        }) => {
            let source = if *example {
                GraphSource::Example
            } else {
                GraphSource::from_arg(input.as_deref())?
            };
            let args = RouteArgs {
                source,
                start: *start_node,
                end: *end_node,
            };
            commands::route::execute(cli, config, format, &args)
        }

        Some(Commands::Example) => commands::example::execute(format),
    }
}

fn handle_no_command() -> Result<()> {
    println!("ritual {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Compares the shortest route and the most-victims route through a settlement graph.");
    println!();
    println!("Run `ritual --help` for usage information.");
    Ok(())
}
