//! Error types for mesh-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ProductId;

/// All errors that can arise from registry, snapshot and config operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// `add_metadata` referenced a data product that does not exist.
    #[error("data product {id} not found")]
    ProductNotFound { id: ProductId },

    /// Underlying I/O failure, with the path that was being touched.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parse error on load. Includes file path and line context from serde_json.
    #[error("failed to parse registry data at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed `config.yaml`.
    #[error("failed to parse config at {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience constructor for [`RegistryError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RegistryError {
    RegistryError::Io {
        path: path.into(),
        source,
    }
}
