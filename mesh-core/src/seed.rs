//! Example dataset loaded on first run, when no data file exists yet.
//!
//! Two Agriculture Canada style teams, five products, four metadata entries
//! per product covering the business / technical / governance namespaces.

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::types::{NewDataProduct, NewMetadataEntry, TeamId};

const TEAMS: [&str; 2] = ["Climate & Environment", "Crop Analytics"];

struct SeedProduct {
    /// Index into [`TEAMS`].
    owner: usize,
    name: &'static str,
    description: &'static str,
    data_format: &'static str,
    access_uri: &'static str,
    status: &'static str,
    classification: &'static str,
    /// `(namespace, key, value, value_type)`
    metadata: [(&'static str, &'static str, &'static str, &'static str); 4],
}

impl SeedProduct {
    fn request(&self, owner_team_id: TeamId) -> NewDataProduct {
        NewDataProduct {
            name: self.name.to_string(),
            description: self.description.to_string(),
            owner_team_id,
            data_format: self.data_format.to_string(),
            access_uri: self.access_uri.to_string(),
            status: self.status.to_string(),
            classification: self.classification.to_string(),
        }
    }
}

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        owner: 0,
        name: "canada_climate_observations_daily",
        description: "Daily climate observations aggregated from Environment Canada weather stations.",
        data_format: "parquet",
        access_uri: "s3://agriculture-canada/curated/climate_observations_daily/",
        status: "active",
        classification: "public",
        metadata: [
            ("business", "domain", "climate", "string"),
            ("technical", "spatial_resolution", "station-level", "string"),
            ("technical", "refresh_schedule", "0 6 * * *", "cron"),
            ("governance", "source", "Environment and Climate Change Canada", "string"),
        ],
    },
    SeedProduct {
        owner: 1,
        name: "crop_yield_forecast_grid",
        description: "Grid-level crop yield forecasts derived from historical yield data and climate indicators.",
        data_format: "geoparquet",
        access_uri: "s3://agriculture-canada/curated/crop_yield_forecast/",
        status: "active",
        classification: "internal",
        metadata: [
            ("business", "domain", "agriculture", "string"),
            ("technical", "grid_system", "10km x 10km national grid", "string"),
            ("technical", "model_type", "regression + climate indicators", "string"),
            ("governance", "intended_use", "research and policy analysis", "string"),
        ],
    },
    SeedProduct {
        owner: 0,
        name: "soil_moisture_satellite_weekly",
        description: "Weekly soil moisture estimates derived from SMAP satellite passes over agricultural regions.",
        data_format: "geoparquet",
        access_uri: "s3://agriculture-canada/curated/soil_moisture_weekly/",
        status: "active",
        classification: "public",
        metadata: [
            ("business", "domain", "climate", "string"),
            ("technical", "spatial_resolution", "9km grid", "string"),
            ("technical", "refresh_schedule", "0 4 * * 1", "cron"),
            ("governance", "license", "Open Government Licence - Canada", "string"),
        ],
    },
    SeedProduct {
        owner: 1,
        name: "agriculture_land_use_inventory",
        description: "Annual inventory of cropland, pasture and fallow area by census division.",
        data_format: "delta",
        access_uri: "s3://agriculture-canada/curated/land_use_inventory/",
        status: "active",
        classification: "restricted",
        metadata: [
            ("business", "domain", "agriculture", "string"),
            ("technical", "partition_key", "reference_year", "string"),
            ("technical", "row_count", "293", "integer"),
            ("governance", "data_steward", "Crop Analytics", "string"),
        ],
    },
    SeedProduct {
        owner: 1,
        name: "census_of_agriculture_farm_profiles",
        description: "Farm operator and operation profiles from the Census of Agriculture.",
        data_format: "csv",
        access_uri: "s3://agriculture-canada/raw/census_farm_profiles/",
        status: "draft",
        classification: "restricted",
        metadata: [
            ("business", "domain", "agriculture", "string"),
            ("technical", "refresh_schedule", "0 0 1 5 *", "cron"),
            ("technical", "encoding", "utf-8", "string"),
            ("governance", "source", "Statistics Canada", "string"),
        ],
    },
];

/// Populate `registry` with the example teams, products and metadata.
pub fn seed_mock_data(registry: &mut Registry) -> Result<(), RegistryError> {
    let teams: Vec<TeamId> = TEAMS
        .iter()
        .map(|name| registry.create_team(*name).id)
        .collect();

    // Products are created before any metadata so product ids follow table order.
    let mut created = Vec::with_capacity(PRODUCTS.len());
    for seed in PRODUCTS {
        let product = registry.create_data_product(seed.request(teams[seed.owner]));
        created.push((product.id, seed));
    }

    for (product_id, seed) in created {
        for (namespace, key, value, value_type) in seed.metadata {
            registry.add_metadata(NewMetadataEntry::new(
                product_id, namespace, key, value, value_type,
            ))?;
        }
    }

    tracing::info!(
        teams = registry.team_count(),
        products = registry.product_count(),
        metadata = registry.metadata_count(),
        "seeded registry with example data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    #[test]
    fn seed_populates_two_teams_and_five_products() {
        let mut reg = Registry::new();
        seed_mock_data(&mut reg).expect("seed");
        assert_eq!(reg.team_count(), 2);
        assert_eq!(reg.product_count(), 5);
        assert_eq!(reg.metadata_count(), 20);
    }

    #[test]
    fn first_two_products_match_the_classic_pair() {
        let mut reg = Registry::new();
        seed_mock_data(&mut reg).expect("seed");
        let names: Vec<&str> = reg.list_products().into_iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names[0], "canada_climate_observations_daily");
        assert_eq!(names[1], "crop_yield_forecast_grid");
    }

    #[test]
    fn every_product_spans_all_namespaces() {
        let mut reg = Registry::new();
        seed_mock_data(&mut reg).expect("seed");
        for product in reg.list_products() {
            assert_eq!(product.metadata.len(), 4, "{}", product.name);
            for ns in ["business", "technical", "governance"] {
                assert!(
                    product.metadata.iter().any(|m| m.namespace == ns),
                    "{} is missing namespace {ns}",
                    product.name
                );
            }
        }
    }

    #[test]
    fn seeded_owners_resolve() {
        let mut reg = Registry::new();
        seed_mock_data(&mut reg).expect("seed");
        let climate = reg.get_product(ProductId(1)).expect("product 1");
        assert_eq!(reg.owner_name(climate), "Climate & Environment");
        let crops = reg.get_product(ProductId(2)).expect("product 2");
        assert_eq!(reg.owner_name(crops), "Crop Analytics");
    }
}
