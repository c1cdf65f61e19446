//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the embedded
//! [`EngineSettings`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. `GANTRY_*` environment variables (`__` separates nesting, e.g.
//!    `GANTRY_ENGINE__MARKERS__ENTITY`)
//! 2. Config file (`--config`, else `./gantry.toml`, else the platform
//!    config directory)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gantry_core::application::EngineSettings;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Everything the metadata engine consumes: layer namespaces, layer
    /// paths, marker type names, artifact extension.
    pub engine: EngineSettings,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?);

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.as_path()));
            }
            None => {
                builder = builder
                    .add_source(config::File::from(Self::config_path().as_path()).required(false));
            }
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("GANTRY").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path of the configuration file when `--config` is not given:
    /// `./gantry.toml` if present, else the platform config directory.
    pub fn config_path() -> PathBuf {
        let local = Path::new("gantry.toml");
        if local.exists() {
            return local.to_path_buf();
        }

        directories::ProjectDirs::from("com", "gantry", "gantry")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| local.to_path_buf())
    }

    /// Default configuration serialized as TOML (used by `gantry init`).
    pub fn default_toml() -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}
