#![deny(missing_docs)]

//! # Atlan CLI
//!
//! Command Line Interface for the Atlan metadata catalog.
//!
//! Supported Commands:
//! - `get`: Fetches one asset by GUID or qualified name.
//! - `search`: Streams the assets matching a set of filters.
//! - `save`: Creates or updates assets read from JSON or YAML files.
//! - `certify` / `announce`: Sets or clears certificates and announcements.
//! - `tag`: Attaches or detaches tags.
//! - `delete` / `restore`: Archives, purges or restores assets.

use atlan_core::config::{ENV_API_KEY, ENV_BASE_URL};
use atlan_core::{AtlanClient, ClientConfig};
use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod announce;
mod certify;
mod delete;
mod error;
mod get;
mod output;
mod restore;
mod save;
mod search;
mod tag;
#[cfg(feature = "client")]
mod transport;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Atlan metadata catalog CLI")]
struct Cli {
    /// Tenant URL (e.g. `https://tenant.atlan.com`).
    #[clap(long, global = true, env = ENV_BASE_URL)]
    base_url: Option<String>,

    /// API key sent as a bearer token.
    #[clap(long, global = true, env = ENV_API_KEY, hide_env_values = true)]
    api_key: Option<String>,

    /// Default number of results per search page.
    #[clap(long, global = true)]
    page_size: Option<u32>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch one asset.
    Get(get::GetArgs),
    /// Search for assets.
    Search(search::SearchArgs),
    /// Create or update assets from files.
    Save(save::SaveArgs),
    /// Set or clear the certificate of an asset.
    Certify(certify::CertifyArgs),
    /// Set or clear the announcement of an asset.
    Announce(announce::AnnounceArgs),
    /// Attach or detach tags.
    Tag(tag::TagArgs),
    /// Archive or purge assets.
    Delete(delete::DeleteArgs),
    /// Restore archived assets.
    Restore(restore::RestoreArgs),
}

impl Cli {
    fn config(&self) -> CliResult<ClientConfig> {
        let base_url = self.base_url.as_deref().ok_or_else(|| {
            error::CliError::Usage(format!("--base-url or {} is required", ENV_BASE_URL))
        })?;
        let mut config = ClientConfig::new(base_url)?;
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.as_str());
        }
        if let Some(size) = self.page_size {
            config = config.with_page_size(size);
        }
        Ok(config)
    }
}

#[cfg(feature = "client")]
fn connect(config: ClientConfig) -> CliResult<AtlanClient> {
    let transport = transport::UreqTransport::new(&config);
    Ok(AtlanClient::new(config, transport))
}

#[cfg(not(feature = "client"))]
fn connect(_config: ClientConfig) -> CliResult<AtlanClient> {
    Err(error::CliError::General(
        "built without the `client` feature; no HTTP transport available".into(),
    ))
}

fn run(cli: &Cli) -> CliResult<()> {
    let client = connect(cli.config()?)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Get(args) => get::execute(args, &client, &mut out),
        Commands::Search(args) => search::execute(args, &client, &mut out),
        Commands::Save(args) => save::execute(args, &client, &mut out),
        Commands::Certify(args) => certify::execute(args, &client, &mut out),
        Commands::Announce(args) => announce::execute(args, &client, &mut out),
        Commands::Tag(args) => tag::execute(args, &client, &mut out),
        Commands::Delete(args) => delete::execute(args, &client, &mut out),
        Commands::Restore(args) => restore::execute(args, &client, &mut out),
    }
}

fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("Running {:?}", cli.command);
    run(&cli)
}
