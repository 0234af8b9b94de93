//! Output format handling for ritual
//!
//! Supports three output formats:
//! - human: Readable sections and a summary table for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts and agents

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RitualError;

/// Output format for ritual commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output, one line per route
    Records,
}

impl FromStr for OutputFormat {
    type Err = RitualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(RitualError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}
