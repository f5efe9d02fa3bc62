//! `mesh search <term>`

use anyhow::Result;
use clap::Args;

use mesh_core::Registry;

use crate::report;

/// Search data products by name.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Case-insensitive substring of the product name.
    pub term: String,
}

impl SearchArgs {
    pub fn run(self, registry: &Registry, json: bool) -> Result<()> {
        let results = registry.search_products_by_name(&self.term);
        tracing::debug!(term = %self.term, hits = results.len(), "searched products");

        if json {
            return report::print_json(&report::product_summaries(registry, &results));
        }
        if results.is_empty() {
            println!("No products found for term '{}'.", self.term);
            return Ok(());
        }

        report::print_header(&format!("Search results for '{}'", self.term));
        println!("{}", report::product_table(registry, &results));
        Ok(())
    }
}
