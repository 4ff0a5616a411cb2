#![deny(missing_docs)]

//! # Restore Command
//!
//! Brings archived assets back, by GUID or by type and qualified name.

use crate::error::{CliError, CliResult};
use crate::output::write_mutation;
use atlan_core::AtlanClient;
use std::io::Write;

/// Arguments for the restore command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RestoreArgs {
    /// GUID of an archived asset (repeatable).
    #[clap(long = "guid", conflicts_with_all = ["type_name", "qualified_name"])]
    pub guids: Vec<String>,

    /// Type of the asset, used with `--qualified-name`.
    #[clap(long = "type", requires = "qualified_name")]
    pub type_name: Option<String>,

    /// Qualified name of the asset, used with `--type`.
    #[clap(long, requires = "type_name")]
    pub qualified_name: Option<String>,
}

/// Executes the restore.
pub fn execute(args: &RestoreArgs, client: &AtlanClient, out: &mut impl Write) -> CliResult<()> {
    if let (Some(type_name), Some(qn)) = (&args.type_name, &args.qualified_name) {
        if client.assets().restore_by_qualified_name(type_name, qn)? {
            writeln!(out, "Restored: {} {}", type_name, qn)?;
        } else {
            writeln!(out, "Already active: {} {}", type_name, qn)?;
        }
        return Ok(());
    }
    if args.guids.is_empty() {
        return Err(CliError::Usage(
            "either --guid or --type with --qualified-name is required".into(),
        ));
    }
    let guids: Vec<&str> = args.guids.iter().map(String::as_str).collect();
    let response = client.assets().restore(&guids)?;
    write_mutation(out, &response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlan_core::{ClientConfig, HttpMethod, MockTransport};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client(mock: &MockTransport) -> AtlanClient {
        AtlanClient::new(ClientConfig::new("https://tenant.atlan.com").unwrap(), mock.clone())
    }

    fn by_name() -> RestoreArgs {
        RestoreArgs {
            type_name: Some("Table".into()),
            qualified_name: Some("default/postgres/1/db/s/t".into()),
            ..RestoreArgs::default()
        }
    }

    #[test]
    fn test_restore_archived_by_qualified_name() {
        let mock = MockTransport::new();
        mock.respond_json(&json!({"entity": {
            "typeName": "Table",
            "guid": "t1",
            "status": "DELETED",
            "attributes": {"qualifiedName": "default/postgres/1/db/s/t", "name": "t"}
        }}))
        .respond_json(&json!({"mutatedEntities": {}}));

        let mut out = Vec::new();
        execute(&by_name(), &client(&mock), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Restored: Table default/postgres/1/db/s/t\n"
        );
        let request = mock.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.query_values("guid"), vec!["t1"]);
    }

    #[test]
    fn test_restore_active_is_noop() {
        let mock = MockTransport::new();
        mock.respond_json(&json!({"entity": {
            "typeName": "Table",
            "guid": "t1",
            "status": "ACTIVE",
            "attributes": {"qualifiedName": "default/postgres/1/db/s/t", "name": "t"}
        }}));

        let mut out = Vec::new();
        execute(&by_name(), &client(&mock), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Already active: Table default/postgres/1/db/s/t\n"
        );
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn test_restore_requires_target() {
        let err = execute(
            &RestoreArgs::default(),
            &client(&MockTransport::new()),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }
}
