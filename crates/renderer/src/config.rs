// SPDX-License-Identifier: MIT

//!
//! Nenpyo renderer config
//!

use crate::{LayoutParams, LayoutStyle, TimelineColours};
use directories_next::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "Nenpyo";
const APPLICATION_NAME: &str = "Nenpyo";
const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can arise when loading or saving a [`RendererConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Couldn't determine the config directory")]
    NoConfigDir,
}

/// Everything that controls how a timeline looks.  Any field missing from a
/// config file takes its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub layout_style: LayoutStyle,
    pub layout_params: LayoutParams,
    pub colours: TimelineColours,
}

impl RendererConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the config at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let config = RendererConfig::from_json(&data)?;
        debug!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Load the config at `path` if given, otherwise the one in the platform
    /// config directory if there is one, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return RendererConfig::load(path);
        }
        match default_config_path() {
            Ok(path) if path.exists() => RendererConfig::load(&path),
            _ => {
                info!("No config file found, using defaults");
                Ok(RendererConfig::default())
            }
        }
    }
}

/// Get the project directories (e.g. where the config is stored)
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME).ok_or(ConfigError::NoConfigDir)
}

/// Get the path to the config in the platform config directory
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_file = project_dirs()?.config_dir().join(CONFIG_FILE_NAME);
    debug!("Config file path = {config_file:?}");
    Ok(config_file)
}
