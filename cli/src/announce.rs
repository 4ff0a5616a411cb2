#![deny(missing_docs)]

//! # Announce Command
//!
//! Sets or clears the announcement banner of an asset.

use crate::error::{CliError, CliResult};
use crate::output::write_updated;
use atlan_core::{AnnouncementType, AtlanClient};
use std::io::Write;

/// Arguments for the announce command.
#[derive(clap::Args, Debug, Clone)]
pub struct AnnounceArgs {
    /// Type of the asset (e.g. `Table`).
    #[clap(long = "type")]
    pub type_name: String,

    /// Qualified name of the asset.
    #[clap(long)]
    pub qualified_name: String,

    /// Kind of announcement: `information`, `warning` or `issue`.
    #[clap(long, default_value = "information")]
    pub kind: AnnouncementType,

    /// Title of the announcement.
    #[clap(long, required_unless_present = "remove")]
    pub title: Option<String>,

    /// Body of the announcement.
    #[clap(long)]
    pub message: Option<String>,

    /// Clear the announcement instead of setting one.
    #[clap(long, conflicts_with_all = ["title", "message"], requires = "name")]
    pub remove: bool,

    /// Name of the asset (needed when clearing).
    #[clap(long)]
    pub name: Option<String>,
}

/// Executes the announcement change.
pub fn execute(args: &AnnounceArgs, client: &AtlanClient, out: &mut impl Write) -> CliResult<()> {
    let assets = client.assets();
    let updated = if args.remove {
        let name = args
            .name
            .as_deref()
            .ok_or_else(|| CliError::Usage("--remove requires --name".into()))?;
        assets.remove_announcement(&args.type_name, &args.qualified_name, name)?
    } else {
        let title = args
            .title
            .as_deref()
            .ok_or_else(|| CliError::Usage("--title is required".into()))?;
        assets.update_announcement(
            &args.type_name,
            &args.qualified_name,
            args.kind,
            title,
            args.message.as_deref(),
        )?
    };
    write_updated(out, updated.as_ref())
}
