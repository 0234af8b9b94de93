//! CLI argument parsing for ritual
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_output_format;
use ritual_core::format::OutputFormat;

/// Ritual - compare the shortest and the most-victims route through a settlement graph
#[derive(Parser, Debug)]
#[command(name = "ritual")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records [default: human]
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, trace, ritual_core=trace)
    #[arg(long, global = true, env = "RITUAL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: ~/.config/ritual/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest route and the route with the most victims
    Route {
        /// Graph file ("n m" then m lines of "u v d c"), or - for stdin
        #[arg(required_unless_present = "example", conflicts_with = "example")]
        input: Option<PathBuf>,

        /// Use the built-in example graph
        #[arg(long)]
        example: bool,

        /// Start settlement
        #[arg(long, short)]
        start: Option<usize>,

        /// End settlement
        #[arg(long, short)]
        end: Option<usize>,
    },

    /// Print the built-in example graph
    Example,
}
