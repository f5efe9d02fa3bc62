//! `mesh product <id>`

use anyhow::Result;
use clap::Args;

use mesh_core::{ProductId, Registry};

use crate::report::{self, ProductDetailJson};

/// Show a data product by id.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Data product id.
    pub id: ProductId,
}

impl ProductArgs {
    pub fn run(self, registry: &Registry, json: bool) -> Result<()> {
        let Some(product) = registry.get_product(self.id) else {
            if json {
                return report::print_json(&serde_json::Value::Null);
            }
            println!("No data product with id {} found.", self.id);
            return Ok(());
        };

        if json {
            return report::print_json(&ProductDetailJson {
                product,
                owner: registry.owner_name(product),
            });
        }

        report::print_header(&format!("Data product: {}", product.name));
        println!("{}", report::product_details(registry, product));
        println!();
        Ok(())
    }
}
