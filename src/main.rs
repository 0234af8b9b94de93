//! Ritual - settlement route comparison CLI
//!
//! Reads a directed settlement graph, then reports the minimum-distance
//! route and the route that collects the most victims between two settlements.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use ritual_core::config::RitualConfig;
use ritual_core::error::{ExitCode as RitualExitCode, RitualError};
use ritual_core::format::OutputFormat;
use ritual_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `Cli.format` is available. If the user
            // requested JSON output, emit a structured error envelope.
            if argv_format_json {
                let ritual_error = match err.kind() {
                    // Help and version are informational, not errors - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        RitualError::UsageError(err.to_string())
                    }
                    _ => RitualError::Other(err.to_string()),
                };

                eprintln!("{}", ritual_error.to_json());
                return ExitCode::from(ritual_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = match RitualConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(&e, cli.format.unwrap_or_default(), cli.quiet),
    };
    let format = cli.format.or(config.output.format).unwrap_or_default();

    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => ExitCode::from(RitualExitCode::Success as u8),
        Err(e) => report_error(&e, format, cli.quiet),
    }
}

fn report_error(error: &RitualError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }

    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
