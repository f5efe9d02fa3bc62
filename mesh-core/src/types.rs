//! Domain types for the Mesh registry.
//!
//! Identities are `u64` newtypes assigned by [`crate::Registry`]; every other
//! field is a plain `String` and is stored exactly as given.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// The identity handed out first by a fresh registry.
            pub const FIRST: Self = Self(1);

            pub(crate) fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

id_newtype!(
    /// Identity of a [`Team`].
    TeamId
);
id_newtype!(
    /// Identity of a [`DataProduct`].
    ProductId
);
id_newtype!(
    /// Identity of a [`MetadataEntry`].
    MetadataId
);

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// An organizational team that owns data products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A free-form annotation attached to a single data product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub id: MetadataId,
    pub data_product_id: ProductId,
    /// Conventionally `business`, `technical` or `governance`.
    pub namespace: String,
    pub key: String,
    pub value: String,
    /// How to read `value` (e.g. `string`, `cron`). Never interpreted.
    pub value_type: String,
    pub created_at: DateTime<Utc>,
}

/// A published dataset, owned by a team, carrying its metadata entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub owner_team_id: TeamId,
    pub data_format: String,
    pub access_uri: String,
    /// Conventionally `active`, `deprecated` or `draft`.
    pub status: String,
    /// Conventionally `internal`, `restricted` or `public`.
    pub classification: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
}

// ---------------------------------------------------------------------------
// Creation requests
// ---------------------------------------------------------------------------

/// Caller-supplied fields for [`crate::Registry::create_data_product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDataProduct {
    pub name: String,
    pub description: String,
    pub owner_team_id: TeamId,
    pub data_format: String,
    pub access_uri: String,
    pub status: String,
    pub classification: String,
}

/// Caller-supplied fields for [`crate::Registry::add_metadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMetadataEntry {
    pub data_product_id: ProductId,
    pub namespace: String,
    pub key: String,
    pub value: String,
    pub value_type: String,
}

impl NewMetadataEntry {
    pub fn new(
        data_product_id: ProductId,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            data_product_id,
            namespace: namespace.into(),
            key: key.into(),
            value: value.into(),
            value_type: value_type.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
