#![deny(missing_docs)]

//! # Search Command
//!
//! Runs an index search built from command line filters and streams the
//! matches, one asset per line.

use crate::error::CliResult;
use crate::output::write_json;
use atlan_core::search::fields::keyword_for;
use atlan_core::{Asset, AtlanClient, FluentSearch};
use std::io::Write;

/// Arguments for the search command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Restrict results to these asset types (repeatable).
    #[clap(long = "type")]
    pub types: Vec<String>,

    /// Exact-match filter on an attribute.
    /// Format: `"attribute=value"`.
    /// Example: `"--where certificateStatus=VERIFIED"`
    #[clap(long = "where", value_parser = parse_key_val)]
    pub filters: Vec<(String, String)>,

    /// Results requested per page.
    #[clap(long)]
    pub page_size: Option<u32>,

    /// Stop after this many results.
    #[clap(long)]
    pub limit: Option<usize>,

    /// Extra attribute to include on each result (repeatable).
    #[clap(long = "attribute")]
    pub attributes: Vec<String>,

    /// Print only the approximate number of matches.
    #[clap(long, conflicts_with = "dry_run")]
    pub count: bool,

    /// Print the search request instead of running it.
    #[clap(long)]
    pub dry_run: bool,

    /// Print full JSON for each result.
    #[clap(long)]
    pub json: bool,
}

/// Helper to parse "key=value" arguments.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

fn build<'c>(args: &SearchArgs, client: &'c AtlanClient) -> FluentSearch<'c> {
    let mut search = client.select();
    match args.types.as_slice() {
        [] => {}
        [single] => search = search.asset_type(single),
        several => search = search.asset_types(several),
    }
    for (attribute, value) in &args.filters {
        search = search.where_(keyword_for(attribute).eq(value.as_str()));
    }
    if let Some(size) = args.page_size {
        search = search.page_size(size);
    }
    for attribute in &args.attributes {
        search = search.include_on_results(attribute.as_str());
    }
    search
}

fn write_line(out: &mut impl Write, asset: &Asset) -> CliResult<()> {
    writeln!(
        out,
        "{}\t{}\t{}",
        asset.type_name(),
        asset.qualified_name().unwrap_or("-"),
        asset.guid().unwrap_or("-")
    )?;
    Ok(())
}

/// Executes the search.
pub fn execute(args: &SearchArgs, client: &AtlanClient, out: &mut impl Write) -> CliResult<()> {
    let search = build(args, client);

    if args.dry_run {
        return write_json(out, &search.to_request());
    }
    if args.count {
        writeln!(out, "{}", search.count()?)?;
        return Ok(());
    }

    let limit = args.limit.unwrap_or(usize::MAX);
    let mut found = Vec::new();
    for asset in search.stream().take(limit) {
        let asset = asset?;
        if args.json {
            found.push(asset);
        } else {
            write_line(out, &asset)?;
        }
    }
    if args.json {
        write_json(out, &found)?;
    }
    log::info!("Search complete.");
    Ok(())
}
