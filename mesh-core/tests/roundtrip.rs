//! Data-file save / load round trip.
//!
//! The data file is a seed list: names and product fields survive, ids are
//! reassigned from 1 on reload, and metadata is dropped. These tests pin
//! that behavior down rather than assume a faithful snapshot.

use std::fs;
use std::sync::Arc;

use assert_fs::prelude::*;
use mesh_core::{
    seed, snapshot, NewDataProduct, NewMetadataEntry, ProductId, Registry, RegistryError,
    Snapshot, SystemClock, TeamId,
};
use predicates::prelude::predicate;

fn product(name: &str, owner: TeamId) -> NewDataProduct {
    NewDataProduct {
        name: name.to_string(),
        description: format!("{name} description"),
        owner_team_id: owner,
        data_format: "delta".to_string(),
        access_uri: format!("abfss://lake/{name}"),
        status: "deprecated".to_string(),
        classification: "restricted".to_string(),
    }
}

fn reload(path: &std::path::Path) -> Registry {
    snapshot::open_at(path, Arc::new(SystemClock)).expect("reload")
}

// ---------------------------------------------------------------------------
// 1. Round trip
// ---------------------------------------------------------------------------

#[test]
fn round_trip_preserves_names_and_product_fields() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mesh_registry.json");

    let mut reg = Registry::new();
    let ops = reg.create_team("Ops");
    let data = reg.create_team("Data");
    reg.create_data_product(product("events", data.id));
    reg.create_data_product(product("incidents", ops.id));
    reg.create_data_product(product("ghost", TeamId(42)));

    snapshot::persist_at(file.path(), &reg).expect("save");
    let loaded = reload(file.path());

    let teams: Vec<&str> = loaded.list_teams().into_iter().map(|t| t.name.as_str()).collect();
    assert_eq!(teams, vec!["Ops", "Data"]);

    let original = Snapshot::capture(&reg);
    let reloaded = Snapshot::capture(&loaded);
    assert_eq!(original, reloaded, "non-metadata product fields must survive");
    assert_eq!(loaded.get_product(ProductId(3)).unwrap().owner_team_id, TeamId(42));
}

#[test]
fn reload_reassigns_ids_from_one() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mesh_registry.json");

    // Burn a few ids so the survivors do not start at 1 in the original.
    let mut reg = Registry::new();
    for name in ["a", "b", "c"] {
        reg.create_team(name);
    }
    let seed_list = Snapshot {
        teams: reg
            .list_teams()
            .into_iter()
            .skip(2)
            .map(|t| snapshot::TeamRecord {
                name: t.name.clone(),
            })
            .collect(),
        products: vec![],
    };
    assert_eq!(reg.get_team(TeamId(3)).unwrap().name, "c");

    snapshot::save_at(file.path(), &seed_list).expect("save");
    let loaded = reload(file.path());
    let team = loaded.list_teams()[0];
    assert_eq!(team.id, TeamId(1), "reloaded team gets a fresh id");
    assert_eq!(team.name, "c");
}

#[test]
fn metadata_is_lost_across_reload() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mesh_registry.json");

    let mut reg = Registry::new();
    seed::seed_mock_data(&mut reg).expect("seed");
    assert_eq!(reg.metadata_count(), 20);

    snapshot::persist_at(file.path(), &reg).expect("save");
    let loaded = reload(file.path());

    assert_eq!(loaded.team_count(), 2);
    assert_eq!(loaded.product_count(), 5);
    assert_eq!(loaded.metadata_count(), 0, "metadata is not persisted");
    assert!(loaded
        .list_products()
        .into_iter()
        .all(|p| p.metadata.is_empty()));
}

#[test]
fn reload_stamps_fresh_timestamps() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mesh_registry.json");

    let mut reg = Registry::new();
    reg.create_team("t");
    let original = reg.create_data_product(product("p", TeamId(1)));
    snapshot::persist_at(file.path(), &reg).expect("save");

    let loaded = reload(file.path());
    let product = loaded.get_product(ProductId(1)).unwrap();
    assert!(product.created_at >= original.created_at);
    assert_eq!(product.created_at, product.updated_at);
}

#[test]
fn metadata_added_after_reload_starts_at_one() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mesh_registry.json");

    let mut reg = Registry::new();
    seed::seed_mock_data(&mut reg).expect("seed");
    snapshot::persist_at(file.path(), &reg).expect("save");

    let mut loaded = reload(file.path());
    let entry = loaded
        .add_metadata(NewMetadataEntry::new(ProductId(1), "business", "owner", "x", "string"))
        .expect("add");
    assert_eq!(entry.id.0, 1);
}

// ---------------------------------------------------------------------------
// 2. File handling
// ---------------------------------------------------------------------------

#[test]
fn save_cleans_up_tmp_file() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mesh_registry.json");
    snapshot::persist_at(file.path(), &Registry::new()).expect("save");

    file.assert(predicate::path::exists());
    assert!(
        !snapshot::tmp_path(file.path()).exists(),
        ".tmp must be removed after successful save"
    );
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("nested").child("deeper").child("registry.json");
    snapshot::persist_at(file.path(), &Registry::new()).expect("save");
    file.assert(predicate::str::contains("\"teams\""));
}

#[test]
fn orphaned_tmp_does_not_affect_load() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mesh_registry.json");
    let mut reg = Registry::new();
    reg.create_team("Survivor");
    snapshot::persist_at(file.path(), &reg).expect("save");

    // Simulate crash: .tmp written but process died before rename
    fs::write(snapshot::tmp_path(file.path()), b"CRASH - INCOMPLETE WRITE").expect("write tmp");

    let loaded = reload(file.path());
    assert_eq!(loaded.list_teams()[0].name, "Survivor");
}

#[test]
fn corrupt_file_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mesh_registry.json");
    file.write_str("{ \"teams\": [ { \"name\": ").expect("write");

    let err = snapshot::load_at(file.path()).unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("mesh_registry.json"));
}

#[test]
fn wrong_shape_returns_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mesh_registry.json");
    file.write_str("[\"this is a list, not an object\"]").expect("write");

    let err = snapshot::open_at(file.path(), Arc::new(SystemClock)).unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
}

#[test]
fn reads_file_written_by_hand() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("mesh_registry.json");
    file.write_str(
        r#"{
  "teams": [{ "name": "Climate & Environment" }],
  "products": [
    {
      "name": "canada_climate_observations_daily",
      "description": "Daily observations",
      "owner_team_id": 1,
      "data_format": "parquet",
      "access_uri": "s3://agriculture-canada/curated/climate_observations_daily/",
      "status": "active",
      "classification": "public"
    }
  ]
}"#,
    )
    .expect("write");

    let loaded = reload(file.path());
    let product = loaded.get_product(ProductId(1)).expect("product");
    assert_eq!(product.name, "canada_climate_observations_daily");
    assert_eq!(loaded.owner_name(product), "Climate & Environment");
}
