//! Mesh core library: data-product registry, persistence, seed data, errors.
//!
//! Public API surface:
//! - [`types`]: id newtypes and entity structs
//! - [`clock`]: injectable time source
//! - [`error`]: [`RegistryError`]
//! - [`registry`]: the in-memory [`Registry`] service
//! - [`snapshot`]: flat-file load / save / replay
//! - [`seed`]: example dataset for first run
//! - [`config`]: data file resolution

pub mod clock;
pub mod config;
pub mod error;
pub mod registry;
pub mod seed;
pub mod snapshot;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::MeshConfig;
pub use error::RegistryError;
pub use registry::Registry;
pub use snapshot::Snapshot;
pub use types::{
    DataProduct, MetadataEntry, MetadataId, NewDataProduct, NewMetadataEntry, ProductId, Team,
    TeamId,
};
