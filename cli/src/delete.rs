#![deny(missing_docs)]

//! # Delete Command
//!
//! Archives assets, or purges them permanently.

use crate::error::CliResult;
use crate::output::write_mutation;
use atlan_core::AtlanClient;
use std::io::Write;

/// Arguments for the delete command.
#[derive(clap::Args, Debug, Clone)]
pub struct DeleteArgs {
    /// GUID of an asset to delete (repeatable).
    #[clap(long = "guid", required = true)]
    pub guids: Vec<String>,

    /// Remove the assets permanently instead of archiving them.
    #[clap(long)]
    pub purge: bool,
}

/// Executes the delete.
pub fn execute(args: &DeleteArgs, client: &AtlanClient, out: &mut impl Write) -> CliResult<()> {
    let guids: Vec<&str> = args.guids.iter().map(String::as_str).collect();
    let response = if args.purge {
        client.assets().purge(&guids)?
    } else {
        client.assets().delete(&guids)?
    };
    write_mutation(out, &response)
}
