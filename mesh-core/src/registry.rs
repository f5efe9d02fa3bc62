//! In-memory data-product registry.
//!
//! The [`Registry`] owns every team, product and metadata entry, hands out
//! identities, and answers queries. Identities are sequential per entity kind
//! and start at 1 for each fresh registry.
//!
//! # Integrity rules
//!
//! - [`Registry::add_metadata`] fails with [`RegistryError::ProductNotFound`]
//!   when the product does not exist, and leaves the registry untouched.
//! - [`Registry::create_data_product`] does **not** check that the owner team
//!   exists. Callers that need that guarantee check with [`Registry::get_team`]
//!   first (the interactive `add-product` flow does).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::error::RegistryError;
use crate::types::{
    DataProduct, MetadataEntry, MetadataId, NewDataProduct, NewMetadataEntry, ProductId, Team,
    TeamId,
};

/// Sole owner of all registry state.
///
/// Maps are keyed by monotonically increasing ids, so iteration order is
/// creation order.
pub struct Registry {
    teams: BTreeMap<TeamId, Team>,
    products: BTreeMap<ProductId, DataProduct>,
    /// Flat metadata index: entry id -> (owning product, position in its list).
    metadata: BTreeMap<MetadataId, (ProductId, usize)>,
    next_team_id: TeamId,
    next_product_id: ProductId,
    next_metadata_id: MetadataId,
    clock: Arc<dyn Clock>,
}

impl Registry {
    /// Empty registry stamped by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Empty registry stamped by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            teams: BTreeMap::new(),
            products: BTreeMap::new(),
            metadata: BTreeMap::new(),
            next_team_id: TeamId::FIRST,
            next_product_id: ProductId::FIRST,
            next_metadata_id: MetadataId::FIRST,
            clock,
        }
    }

    // -----------------------------------------------------------------------
    // Creation
    // -----------------------------------------------------------------------

    /// Register a team. Ids are sequential from 1 in call order.
    pub fn create_team(&mut self, name: impl Into<String>) -> Team {
        let team = Team {
            id: self.next_team_id,
            name: name.into(),
            created_at: self.clock.now(),
        };
        self.teams.insert(team.id, team.clone());
        self.next_team_id = self.next_team_id.next();
        tracing::debug!(team_id = %team.id, name = %team.name, "created team");
        team
    }

    /// Create a product with an empty metadata list.
    ///
    /// `owner_team_id` is stored as given, even if no such team exists.
    pub fn create_data_product(&mut self, new: NewDataProduct) -> DataProduct {
        let now = self.clock.now();
        let product = DataProduct {
            id: self.next_product_id,
            name: new.name,
            description: new.description,
            owner_team_id: new.owner_team_id,
            data_format: new.data_format,
            access_uri: new.access_uri,
            status: new.status,
            classification: new.classification,
            created_at: now,
            updated_at: now,
            metadata: Vec::new(),
        };
        if !self.teams.contains_key(&product.owner_team_id) {
            tracing::debug!(
                product_id = %product.id,
                owner_team_id = %product.owner_team_id,
                "product owner team is not registered"
            );
        }
        self.products.insert(product.id, product.clone());
        self.next_product_id = self.next_product_id.next();
        tracing::debug!(product_id = %product.id, name = %product.name, "created data product");
        product
    }

    /// Append a metadata entry to an existing product.
    ///
    /// Returns [`RegistryError::ProductNotFound`] without assigning an id if
    /// the product is absent.
    pub fn add_metadata(&mut self, new: NewMetadataEntry) -> Result<MetadataEntry, RegistryError> {
        let Some(product) = self.products.get_mut(&new.data_product_id) else {
            return Err(RegistryError::ProductNotFound {
                id: new.data_product_id,
            });
        };

        let entry = MetadataEntry {
            id: self.next_metadata_id,
            data_product_id: new.data_product_id,
            namespace: new.namespace,
            key: new.key,
            value: new.value,
            value_type: new.value_type,
            created_at: self.clock.now(),
        };
        self.metadata
            .insert(entry.id, (product.id, product.metadata.len()));
        product.metadata.push(entry.clone());
        self.next_metadata_id = self.next_metadata_id.next();
        tracing::debug!(
            metadata_id = %entry.id,
            product_id = %entry.data_product_id,
            namespace = %entry.namespace,
            key = %entry.key,
            "added metadata"
        );
        Ok(entry)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All teams in creation order.
    pub fn list_teams(&self) -> Vec<&Team> {
        self.teams.values().collect()
    }

    /// All products in creation order.
    pub fn list_products(&self) -> Vec<&DataProduct> {
        self.products.values().collect()
    }

    pub fn get_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn get_product(&self, id: ProductId) -> Option<&DataProduct> {
        self.products.get(&id)
    }

    /// Look up a single metadata entry through the flat index.
    pub fn get_metadata(&self, id: MetadataId) -> Option<&MetadataEntry> {
        let (product_id, position) = self.metadata.get(&id)?;
        self.products.get(product_id)?.metadata.get(*position)
    }

    /// Products whose name contains `term`, ignoring case, in creation order.
    ///
    /// An empty term matches every product.
    pub fn search_products_by_name(&self, term: &str) -> Vec<&DataProduct> {
        let needle = term.to_lowercase();
        self.products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Display name of a product's owner, or `team:<id>` if the team is unknown.
    pub fn owner_name(&self, product: &DataProduct) -> String {
        match self.get_team(product.owner_team_id) {
            Some(team) => team.name.clone(),
            None => format!("team:{}", product.owner_team_id),
        }
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn metadata_count(&self) -> usize {
        self.metadata.len()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("teams", &self.teams.len())
            .field("products", &self.products.len())
            .field("metadata", &self.metadata.len())
            .field("next_team_id", &self.next_team_id)
            .field("next_product_id", &self.next_product_id)
            .field("next_metadata_id", &self.next_metadata_id)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
