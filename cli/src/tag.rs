#![deny(missing_docs)]

//! # Tag Command
//!
//! Attaches tags to, or detaches a tag from, an asset.

use crate::error::CliResult;
use atlan_core::{AtlanClient, AtlanTag};
use clap::Subcommand;
use std::io::Write;

/// Arguments for the tag command.
#[derive(clap::Args, Debug, Clone)]
pub struct TagArgs {
    #[clap(subcommand)]
    action: TagAction,
}

/// Identifies the tagged asset.
#[derive(clap::Args, Debug, Clone)]
pub struct Target {
    /// Type of the asset (e.g. `Table`).
    #[clap(long = "type")]
    pub type_name: String,

    /// Qualified name of the asset.
    #[clap(long)]
    pub qualified_name: String,
}

#[derive(Subcommand, Debug, Clone)]
enum TagAction {
    /// Attach one or more tags.
    Add {
        #[clap(flatten)]
        target: Target,
        /// Tag to attach (repeatable).
        #[clap(long = "tag", required = true)]
        tags: Vec<String>,
        /// Propagate the tags to downstream assets.
        #[clap(long)]
        propagate: bool,
    },
    /// Detach a tag.
    Remove {
        #[clap(flatten)]
        target: Target,
        /// Tag to detach.
        #[clap(long = "tag")]
        tag: String,
    },
}

/// Executes the tag change.
pub fn execute(args: &TagArgs, client: &AtlanClient, out: &mut impl Write) -> CliResult<()> {
    let assets = client.assets();
    match &args.action {
        TagAction::Add {
            target,
            tags,
            propagate,
        } => {
            let tags: Vec<AtlanTag> = tags
                .iter()
                .map(|t| {
                    if *propagate {
                        AtlanTag::propagated(t.as_str(), true, false)
                    } else {
                        AtlanTag::of(t.as_str())
                    }
                })
                .collect();
            assets.add_atlan_tags(&target.type_name, &target.qualified_name, &tags)?;
            writeln!(
                out,
                "Attached {} tag(s) to {}",
                tags.len(),
                target.qualified_name
            )?;
        }
        TagAction::Remove { target, tag } => {
            assets.remove_atlan_tag(&target.type_name, &target.qualified_name, tag)?;
            writeln!(out, "Removed {} from {}", tag, target.qualified_name)?;
        }
    }
    Ok(())
}
