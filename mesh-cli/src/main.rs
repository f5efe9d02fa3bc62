//! Mesh: data product registry CLI.
//!
//! # Usage
//!
//! ```text
//! mesh teams
//! mesh products
//! mesh product <id>
//! mesh search <term>
//! mesh add-product
//!
//! global: --data-file <PATH>   --json
//! ```
//!
//! Every invocation loads the data file (or seeds example data when it does
//! not exist), runs one command, then writes the data file back.

mod commands;
mod report;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{product::ProductArgs, search::SearchArgs};
use mesh_core::{config, snapshot, SystemClock};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "mesh",
    version,
    about = "Data product registry CLI",
    long_about = None,
)]
struct Cli {
    /// Registry data file. Overrides $MESH_DATA_FILE and ~/.mesh/config.yaml.
    #[arg(long, global = true, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Emit machine-readable JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List teams.
    Teams,

    /// List data products.
    Products,

    /// Show a data product by id.
    Product(ProductArgs),

    /// Search data products by name.
    Search(SearchArgs),

    /// Interactively add a new data product.
    AddProduct,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let data_file =
        config::data_file(cli.data_file).context("failed to resolve registry data file")?;
    let mut registry = snapshot::open_at(&data_file, Arc::new(SystemClock))
        .with_context(|| format!("failed to load registry from '{}'", data_file.display()))?;

    let json = cli.json;
    match cli.command {
        Commands::Teams => commands::teams::run(&registry, json),
        Commands::Products => commands::products::run(&registry, json),
        Commands::Product(args) => args.run(&registry, json),
        Commands::Search(args) => args.run(&registry, json),
        Commands::AddProduct => commands::add_product::run(&mut registry, json),
    }?;

    snapshot::persist_at(&data_file, &registry)
        .with_context(|| format!("failed to save registry to '{}'", data_file.display()))?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
