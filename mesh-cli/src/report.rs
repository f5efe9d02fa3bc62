//! Human-readable and JSON rendering shared by the read commands.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use mesh_core::{DataProduct, Registry, Team};

const RULE_WIDTH: usize = 80;

/// Banner: a rule, the centered title, a rule.
pub fn print_header(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{rule}");
    println!("{}", format!("{title:^width$}", width = RULE_WIDTH).bold());
    println!("{rule}");
}

/// Pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize JSON output")?;
    println!("{json}");
    Ok(())
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "id")]
    id: u64,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "created")]
    created: String,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "id")]
    id: u64,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "owner")]
    owner: String,
}

/// Product listing entry for `--json`.
#[derive(Serialize)]
pub struct ProductSummaryJson<'a> {
    pub id: u64,
    pub name: &'a str,
    pub owner_team_id: u64,
    pub owner: String,
    pub status: &'a str,
}

/// Full product for `mesh product <id> --json`.
#[derive(Serialize)]
pub struct ProductDetailJson<'a> {
    #[serde(flatten)]
    pub product: &'a DataProduct,
    pub owner: String,
}

pub fn team_table(teams: &[&Team]) -> Table {
    let rows: Vec<TeamRow> = teams
        .iter()
        .map(|t| TeamRow {
            id: t.id.0,
            name: t.name.clone(),
            created: t.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

pub fn product_table(registry: &Registry, products: &[&DataProduct]) -> Table {
    let rows: Vec<ProductRow> = products
        .iter()
        .map(|p| ProductRow {
            id: p.id.0,
            name: p.name.clone(),
            owner: registry.owner_name(p),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

pub fn product_summaries<'a>(
    registry: &Registry,
    products: &[&'a DataProduct],
) -> Vec<ProductSummaryJson<'a>> {
    products
        .iter()
        .map(|p| ProductSummaryJson {
            id: p.id.0,
            name: &p.name,
            owner_team_id: p.owner_team_id.0,
            owner: registry.owner_name(p),
            status: &p.status,
        })
        .collect()
}

/// Detail block for a single product, metadata included.
pub fn product_details(registry: &Registry, product: &DataProduct) -> String {
    let mut lines = vec![
        format!("ID          : {}", product.id),
        format!("Description : {}", product.description),
        format!("Owner team  : {}", registry.owner_name(product)),
        format!("Format      : {}", product.data_format),
        format!("Access URI  : {}", product.access_uri),
        format!("Status      : {}", product.status),
        format!("Classif.    : {}", product.classification),
        format!("Created     : {}", product.created_at.format("%Y-%m-%d %H:%M")),
        format!("Updated     : {}", product.updated_at.format("%Y-%m-%d %H:%M")),
        String::new(),
    ];

    if product.metadata.is_empty() {
        lines.push("No metadata entries.".to_string());
    } else {
        lines.push("Metadata:".to_string());
        lines.extend(product.metadata.iter().map(|m| {
            format!(
                "- {}.{} = {} (type={})",
                m.namespace, m.key, m.value, m.value_type
            )
        }));
    }
    lines.join("\n")
}
