//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.users-list.toml` in the working directory
//! 4. `~/.config/users-list/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;
use crate::models::HeadingLevel;
use crate::output::OutputFormat;
use crate::snapshot::UpdateMode;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for `{key}` in {path}: {message}")]
    InvalidValue {
        path: PathBuf,
        key: &'static str,
        message: String,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub output: OutputConfig,
    pub snapshot: SnapshotConfig,
}

/// How user rows are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub heading: HeadingLevel,
    pub row_class: String,
    pub container_class: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            heading: HeadingLevel::H4,
            row_class: constants::DEFAULT_ROW_CLASS.to_string(),
            container_class: None,
        }
    }
}

/// How the render tree is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Spaces per nesting level in HTML output. Zero means compact.
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            indent: 2,
        }
    }
}

/// Where snapshots live and when they may be rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    pub dir: PathBuf,
    pub update: UpdateMode,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(constants::DEFAULT_SNAPSHOT_DIR),
            update: UpdateMode::Missing,
        }
    }
}

/// One config file as written on disk. Only keys present in the file are
/// `Some`, so a layer can restore a built-in default that a lower layer
/// changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub render: RenderLayer,
    pub output: OutputLayer,
    pub snapshot: SnapshotLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderLayer {
    pub heading: Option<HeadingLevel>,
    pub row_class: Option<String>,
    /// An empty string clears a container class set by a lower layer.
    pub container_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputLayer {
    pub format: Option<OutputFormat>,
    pub indent: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnapshotLayer {
    pub dir: Option<PathBuf>,
    pub update: Option<UpdateMode>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, then the local config in `work_dir`, then
    /// applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global_path = Self::global_config_path();
        Self::load_from(global_path.as_deref(), work_dir, env)
    }

    fn load_from(
        global_path: Option<&Path>,
        work_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                let global = Self::load_file(global_path)?;
                config.merge(global);
            }
        }

        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a single config layer from a specific file.
    pub fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        if let Some(indent) = layer.output.indent {
            if indent > constants::MAX_INDENT {
                return Err(ConfigError::InvalidValue {
                    path: path.to_path_buf(),
                    key: "output.indent",
                    message: format!("{indent} exceeds the maximum of {}", constants::MAX_INDENT),
                });
            }
        }
        Ok(layer)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Overlay the keys present in `layer` onto this config.
    fn merge(&mut self, layer: ConfigLayer) {
        let ConfigLayer {
            render,
            output,
            snapshot,
        } = layer;

        if let Some(heading) = render.heading {
            self.render.heading = heading;
        }
        if let Some(row_class) = render.row_class {
            self.render.row_class = row_class;
        }
        if let Some(class) = render.container_class {
            self.render.container_class = Some(class).filter(|c| !c.trim().is_empty());
        }

        if let Some(format) = output.format {
            self.output.format = format;
        }
        if let Some(indent) = output.indent {
            self.output.indent = indent;
        }

        if let Some(dir) = snapshot.dir {
            self.snapshot.dir = dir;
        }
        if let Some(update) = snapshot.update {
            self.snapshot.update = update;
        }
    }

    /// Apply environment variable overrides. Invalid values are ignored.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(constants::ENV_HEADING) {
            match val.parse::<HeadingLevel>() {
                Ok(heading) => self.render.heading = heading,
                Err(_) => invalid_env(constants::ENV_HEADING, &val),
            }
        }
        if let Some(val) = env.non_empty(constants::ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => invalid_env(constants::ENV_FORMAT, &val),
            }
        }
        if let Some(val) = env.non_empty(constants::ENV_INDENT) {
            match val.trim().parse::<usize>() {
                Ok(indent) if indent <= constants::MAX_INDENT => self.output.indent = indent,
                _ => invalid_env(constants::ENV_INDENT, &val),
            }
        }
        if let Some(val) = env.non_empty(constants::ENV_SNAPSHOT_DIR) {
            self.snapshot.dir = PathBuf::from(val);
        }
        if let Some(val) = env.non_empty(constants::ENV_UPDATE_SNAPSHOTS) {
            match val.parse::<UpdateMode>() {
                Ok(mode) => self.snapshot.update = mode,
                Err(_) => invalid_env(constants::ENV_UPDATE_SNAPSHOTS, &val),
            }
        }
    }
}

fn invalid_env(name: &str, value: &str) {
    tracing::warn!(variable = name, value, "ignoring invalid environment value");
}
