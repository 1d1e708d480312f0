//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/hwtools/hwtools.toml`
//! 3. Local config: `<dir>/.hwtools.toml`
//! 4. Environment variables: `HWTOOLS_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::infrastructure::{InfraError, InfraResult};

/// Work-list discipline used when listing tree values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// Queue: level by level
    #[default]
    BreadthFirst,
    /// Stack: pre-order
    DepthFirst,
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traversal::BreadthFirst => write!(f, "breadth-first"),
            Traversal::DepthFirst => write!(f, "depth-first"),
        }
    }
}

impl FromStr for Traversal {
    type Err = InfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breadth-first" | "breadth" | "bfs" => Ok(Traversal::BreadthFirst),
            "depth-first" | "depth" | "dfs" => Ok(Traversal::DepthFirst),
            other => Err(InfraError::Config {
                message: format!("unknown traversal: {other}"),
            }),
        }
    }
}

/// Unified configuration for hwtools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default order for `tree walk`
    pub traversal: Traversal,
    /// Colored terminal output
    pub color: bool,
    /// Print the tree alongside its maximum
    pub show_tree: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            traversal: Traversal::BreadthFirst,
            color: true,
            show_tree: true,
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub traversal: Option<Traversal>,
    pub color: Option<bool>,
    pub show_tree: Option<bool>,
}

/// Get the XDG config directory for hwtools.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hwtools").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("hwtools.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".hwtools.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> InfraResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| InfraError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| InfraError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay values win if specified, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            traversal: overlay.traversal.unwrap_or(self.traversal),
            color: overlay.color.unwrap_or(self.color),
            show_tree: overlay.show_tree.unwrap_or(self.show_tree),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.hwtools.toml`
    pub fn load(local_dir: Option<&Path>) -> InfraResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current, None)
    }

    /// Apply HWTOOLS_* environment variables as explicit overrides.
    ///
    /// `source` replaces the process environment when given.
    fn apply_env_overrides(
        mut settings: Self,
        source: Option<Map<String, String>>,
    ) -> InfraResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("HWTOOLS")
                    .separator("__")
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("traversal") {
            settings.traversal = val.parse()?;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_bool("show_tree") {
            settings.show_tree = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> InfraResult<String> {
        toml::to_string_pretty(self).map_err(|e| InfraError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# hwtools configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/hwtools/hwtools.toml
#   Local:  <dir>/.hwtools.toml
#   Env:    HWTOOLS_* environment variables

# Default order for `hwtools tree walk`: "breadth-first" or "depth-first"
# traversal = "breadth-first"

# Colored output (NO_COLOR is honored as well)
# color = true

# Print the tree together with `hwtools tree max`
# show_tree = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> InfraError {
    InfraError::Config {
        message: e.to_string(),
    }
}
