#![deny(missing_docs)]

//! # Save Command
//!
//! Creates or updates the assets described in JSON or YAML files.
//!
//! Either a single `--file` is read, or every `.json`, `.yaml` and `.yml`
//! file below `--dir` (in path order). All assets go out in one request.

use crate::error::{CliError, CliResult};
use crate::output::write_mutation;
use atlan_core::model::io::{read_assets, DocumentFormat};
use atlan_core::{Asset, AtlanClient};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Arguments for the save command.
#[derive(clap::Args, Debug, Clone)]
pub struct SaveArgs {
    /// File holding the assets (JSON or YAML).
    #[clap(long, conflicts_with = "dir", required_unless_present = "dir")]
    pub file: Option<PathBuf>,

    /// Directory scanned recursively for asset files.
    #[clap(long)]
    pub dir: Option<PathBuf>,

    /// Replace the tags on each asset with the ones in the file.
    #[clap(long)]
    pub replace_tags: bool,
}

/// Lists the asset files under `dir`, sorted by path.
fn collect_files(dir: &Path) -> CliResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CliError::General(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| DocumentFormat::from_path(p).is_some())
        .collect();
    files.sort();
    Ok(files)
}

fn load(args: &SaveArgs) -> CliResult<Vec<Asset>> {
    let files = match (&args.file, &args.dir) {
        (Some(file), _) => vec![file.clone()],
        (None, Some(dir)) => collect_files(dir)?,
        (None, None) => return Err(CliError::Usage("either --file or --dir is required".into())),
    };

    let mut assets = Vec::new();
    for file in &files {
        let found = read_assets(file)?;
        log::info!("Read {} asset(s) from {}", found.len(), file.display());
        assets.extend(found);
    }
    Ok(assets)
}

/// Executes the save.
pub fn execute(args: &SaveArgs, client: &AtlanClient, out: &mut impl Write) -> CliResult<()> {
    let assets = load(args)?;
    if assets.is_empty() {
        writeln!(out, "No assets found.")?;
        return Ok(());
    }
    let response = client.assets().save(&assets, args.replace_tags)?;
    write_mutation(out, &response)
}
