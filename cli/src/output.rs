//! # Output
//!
//! Rendering shared by the commands.

use crate::error::CliResult;
use atlan_core::{Asset, MutationResponse};
use serde::Serialize;
use std::io::Write;

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn describe(asset: &Asset) -> String {
    format!(
        "{} {} ({})",
        asset.type_name(),
        asset.qualified_name().unwrap_or("-"),
        asset.guid().unwrap_or("-")
    )
}

/// One line per touched asset, grouped by kind of change.
pub fn write_mutation(out: &mut impl Write, response: &MutationResponse) -> CliResult<()> {
    if response.is_empty() {
        writeln!(out, "No changes.")?;
        return Ok(());
    }
    let groups = [
        ("Created", response.created_assets()),
        ("Updated", response.updated_assets()),
        ("Partially updated", response.partially_updated_assets()),
        ("Deleted", response.deleted_assets()),
    ];
    for (label, assets) in groups {
        for asset in assets {
            writeln!(out, "{}: {}", label, describe(asset))?;
        }
    }
    Ok(())
}

/// Reports the asset returned by a single-asset update.
pub fn write_updated(out: &mut impl Write, asset: Option<&Asset>) -> CliResult<()> {
    match asset {
        Some(asset) => writeln!(out, "Updated: {}", describe(asset))?,
        None => writeln!(out, "No changes.")?,
    }
    Ok(())
}
