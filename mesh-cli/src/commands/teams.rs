//! `mesh teams`

use anyhow::Result;

use mesh_core::Registry;

use crate::report;

pub fn run(registry: &Registry, json: bool) -> Result<()> {
    let teams = registry.list_teams();
    if json {
        return report::print_json(&teams);
    }

    report::print_header("Teams");
    if teams.is_empty() {
        println!("No teams registered.");
        return Ok(());
    }
    println!("{}", report::team_table(&teams));
    Ok(())
}
