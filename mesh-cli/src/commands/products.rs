//! `mesh products`

use anyhow::Result;

use mesh_core::Registry;

use crate::report;

pub fn run(registry: &Registry, json: bool) -> Result<()> {
    let products = registry.list_products();
    if json {
        return report::print_json(&report::product_summaries(registry, &products));
    }

    report::print_header("Data products");
    if products.is_empty() {
        println!("No data products registered.");
        println!("Run: mesh add-product");
        return Ok(());
    }
    println!("{}", report::product_table(registry, &products));
    Ok(())
}
