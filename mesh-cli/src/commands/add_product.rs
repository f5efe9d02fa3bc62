//! `mesh add-product`: interactive product registration.
//!
//! Prompts for every product field on stdin. Unlike the registry itself, this
//! flow refuses to create a product until the owner team id names a
//! registered team.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use mesh_core::{DataProduct, NewDataProduct, Registry, TeamId};

use crate::report;

const DEFAULT_FORMAT: &str = "parquet";
const DEFAULT_STATUS: &str = "draft";
const DEFAULT_CLASSIFICATION: &str = "internal";

/// In JSON mode the prompts go to stderr so stdout carries only the created product.
pub fn run(registry: &mut Registry, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    if json {
        let product = prompt_product(registry, &mut input, &mut io::stderr().lock())?;
        return report::print_json(&product);
    }

    report::print_header("Add new data product");
    let product = prompt_product(registry, &mut input, &mut io::stdout().lock())?;
    println!(
        "\nCreated data product {} with id {}.",
        product.name, product.id
    );
    Ok(())
}

/// Run the prompt flow against `input` / `out` and create the product.
pub fn prompt_product<R: BufRead, W: Write>(
    registry: &mut Registry,
    input: &mut R,
    out: &mut W,
) -> Result<DataProduct> {
    if registry.team_count() == 0 {
        bail!("no teams registered; a data product needs an owner team");
    }

    let mut prompt = Prompt { input, out };
    let name = prompt.field("Name: ")?;
    let description = prompt.field("Description: ")?;
    let data_format = prompt.field_or("Data format (e.g. parquet, delta): ", DEFAULT_FORMAT)?;
    let access_uri = prompt.field("Access URI: ")?;
    let status = prompt.field_or("Status (active, deprecated, draft): ", DEFAULT_STATUS)?;
    let classification = prompt.field_or(
        "Classification (internal/restricted/public): ",
        DEFAULT_CLASSIFICATION,
    )?;

    writeln!(prompt.out, "\nAvailable teams:")?;
    for team in registry.list_teams() {
        writeln!(prompt.out, "[{}] {}", team.id, team.name)?;
    }
    let owner_team_id = prompt.owner_team(registry)?;

    Ok(registry.create_data_product(NewDataProduct {
        name,
        description,
        owner_team_id,
        data_format,
        access_uri,
        status,
        classification,
    }))
}

struct Prompt<'a, R, W> {
    input: &'a mut R,
    out: &'a mut W,
}

impl<R: BufRead, W: Write> Prompt<'_, R, W> {
    /// One trimmed line; `None` at end of input.
    fn line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn field(&mut self, label: &str) -> Result<String> {
        match self.line(label)? {
            Some(value) => Ok(value),
            None => bail!("input ended before '{}' was entered", label.trim_end_matches([':', ' '])),
        }
    }

    fn field_or(&mut self, label: &str, default: &str) -> Result<String> {
        let value = self.field(label)?;
        Ok(if value.is_empty() {
            default.to_string()
        } else {
            value
        })
    }

    /// Ask until the answer parses and names a registered team.
    fn owner_team(&mut self, registry: &Registry) -> Result<TeamId> {
        loop {
            let Some(raw) = self.line("Owner team id: ")? else {
                bail!("input ended before a valid owner team id was entered");
            };
            let Ok(id) = raw.parse::<TeamId>() else {
                writeln!(self.out, "Please enter a numeric team id.")?;
                continue;
            };
            if registry.get_team(id).is_none() {
                writeln!(self.out, "Unknown team id, try again.")?;
                continue;
            }
            return Ok(id);
        }
    }
}
