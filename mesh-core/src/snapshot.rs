//! Flat-file persistence for the registry.
//!
//! The data file is a JSON seed list, not a full image of the registry:
//!
//! ```text
//! { "teams":    [ { "name": … } ],
//!   "products": [ { "name", "description", "owner_team_id", "data_format",
//!                   "access_uri", "status", "classification" } ] }
//! ```
//!
//! Ids, timestamps and every metadata entry are dropped on save. Loading
//! replays teams then products through the registry's create operations, so
//! reloaded entities get fresh sequential ids starting at 1.
//!
//! Writes use the same atomic `.tmp` + rename flow as the rest of the crate.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{io_err, RegistryError};
use crate::registry::Registry;
use crate::seed;
use crate::types::NewDataProduct;

/// Persisted team: name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
}

/// On-disk registry payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    #[serde(default)]
    pub products: Vec<NewDataProduct>,
}

impl Snapshot {
    /// Read the persisted subset of `registry`.
    pub fn capture(registry: &Registry) -> Self {
        Self {
            teams: registry
                .list_teams()
                .into_iter()
                .map(|t| TeamRecord {
                    name: t.name.clone(),
                })
                .collect(),
            products: registry
                .list_products()
                .into_iter()
                .map(|p| NewDataProduct {
                    name: p.name.clone(),
                    description: p.description.clone(),
                    owner_team_id: p.owner_team_id,
                    data_format: p.data_format.clone(),
                    access_uri: p.access_uri.clone(),
                    status: p.status.clone(),
                    classification: p.classification.clone(),
                })
                .collect(),
        }
    }

    /// Re-create every team, then every product, in file order.
    pub fn replay(&self, registry: &mut Registry) {
        for team in &self.teams {
            registry.create_team(team.name.clone());
        }
        for product in &self.products {
            registry.create_data_product(product.clone());
        }
    }
}

/// Load the snapshot at `path`.
///
/// Returns `Ok(None)` if the file does not exist,
/// `RegistryError::Parse` (with path + line context) if it is malformed.
pub fn load_at(path: &Path) -> Result<Option<Snapshot>, RegistryError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Atomically save `snapshot` to `path`.
///
/// Write flow: serialize → `<file>.tmp` sibling → `rename`.
pub fn save_at(path: &Path, snapshot: &Snapshot) -> Result<(), RegistryError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }

    let json = serde_json::to_string_pretty(snapshot)?;
    let tmp = tmp_path(path);
    std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    tracing::debug!(
        path = %path.display(),
        teams = snapshot.teams.len(),
        products = snapshot.products.len(),
        "saved registry snapshot"
    );
    Ok(())
}

/// Build a registry from the data file at `path`, or from the example
/// dataset if the file does not exist yet.
pub fn open_at(path: &Path, clock: Arc<dyn Clock>) -> Result<Registry, RegistryError> {
    let mut registry = Registry::with_clock(clock);
    match load_at(path)? {
        Some(snapshot) => {
            snapshot.replay(&mut registry);
            tracing::debug!(
                path = %path.display(),
                teams = registry.team_count(),
                products = registry.product_count(),
                "loaded registry snapshot"
            );
        }
        None => {
            tracing::info!(path = %path.display(), "no data file found, seeding example data");
            seed::seed_mock_data(&mut registry)?;
        }
    }
    Ok(registry)
}

/// Capture `registry` and save it to `path`.
pub fn persist_at(path: &Path, registry: &Registry) -> Result<(), RegistryError> {
    save_at(path, &Snapshot::capture(registry))
}

/// `<file>.tmp` in the same directory as `path`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
