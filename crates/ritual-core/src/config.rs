//! Configuration for ritual (stored in ~/.config/ritual/config.toml)
//!
//! Every field is optional. Command-line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RitualError};
use crate::format::OutputFormat;
use crate::graph::NodeId;

const CONFIG_DIR: &str = "ritual";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "RITUAL_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RitualConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub route: RouteConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub format: Option<OutputFormat>,
}

/// Default endpoints used when `--start` / `--end` are omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    pub start: Option<NodeId>,
    pub end: Option<NodeId>,
}

impl RitualConfig {
    /// Default config location, honouring `RITUAL_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RitualError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load an explicit config file, or the default one if it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RitualError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::parse(&content).map_err(|e| {
            RitualError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
