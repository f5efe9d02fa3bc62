//! Where the registry data file lives.
//!
//! # Resolution order
//!
//! 1. explicit path (the CLI `--data-file` flag)
//! 2. `MESH_DATA_FILE` environment variable
//! 3. `data_file:` in `<home>/.mesh/config.yaml`
//! 4. `mesh_registry.json` in the current directory
//!
//! Every function that touches the home
//! directory has an `_at(home, …)` form; tests only call those.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, RegistryError};

/// Environment variable overriding the data file location.
pub const DATA_FILE_ENV: &str = "MESH_DATA_FILE";

/// File name used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "mesh_registry.json";

/// Contents of `~/.mesh/config.yaml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeshConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl MeshConfig {
    /// Pick the data file: `flag`, then `env`, then this config, then the default.
    ///
    /// Empty strings in `env` are ignored.
    pub fn resolve_data_file(&self, flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
        flag.or_else(|| env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

/// `<home>/.mesh/config.yaml`. Pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".mesh").join("config.yaml")
}

/// Load `<home>/.mesh/config.yaml`.
///
/// A missing file yields the default config; malformed YAML is
/// `RegistryError::Config` with the path.
pub fn load_config_at(home: &Path) -> Result<MeshConfig, RegistryError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(MeshConfig::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    if contents.trim().is_empty() {
        return Ok(MeshConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|source| RegistryError::Config { path, source })
}

/// Full resolution against `home`, reading `MESH_DATA_FILE` from the process environment.
pub fn data_file_at(home: &Path, flag: Option<PathBuf>) -> Result<PathBuf, RegistryError> {
    let config = load_config_at(home)?;
    Ok(config.resolve_data_file(flag, std::env::var(DATA_FILE_ENV).ok()))
}

/// `data_file_at` convenience wrapper.
///
/// An unknown home directory is not an error here; the config file is simply skipped.
pub fn data_file(flag: Option<PathBuf>) -> Result<PathBuf, RegistryError> {
    match dirs::home_dir() {
        Some(home) => data_file_at(&home, flag),
        None => Ok(MeshConfig::default().resolve_data_file(flag, std::env::var(DATA_FILE_ENV).ok())),
    }
}
