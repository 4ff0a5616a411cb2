#![deny(missing_docs)]

//! # Get Command
//!
//! Fetches one asset, by GUID or by type and qualified name.

use crate::error::{CliError, CliResult};
use crate::output::write_json;
use atlan_core::{AtlanClient, GetOptions};
use std::io::Write;

/// Arguments for the get command.
#[derive(clap::Args, Debug, Clone)]
pub struct GetArgs {
    /// GUID of the asset.
    #[clap(long, conflicts_with_all = ["type_name", "qualified_name"])]
    pub guid: Option<String>,

    /// Type of the asset (e.g. `Table`), used with `--qualified-name`.
    #[clap(long = "type", requires = "qualified_name")]
    pub type_name: Option<String>,

    /// Qualified name of the asset, used with `--type`.
    #[clap(long, requires = "type_name")]
    pub qualified_name: Option<String>,

    /// Include relationships in the output.
    #[clap(long)]
    pub relationships: bool,
}

/// Prints the asset as JSON.
pub fn execute(args: &GetArgs, client: &AtlanClient, out: &mut impl Write) -> CliResult<()> {
    let options = if args.relationships {
        GetOptions::with_relationships()
    } else {
        GetOptions::minimal()
    };
    let assets = client.assets();
    let asset = match (&args.guid, &args.type_name, &args.qualified_name) {
        (Some(guid), _, _) => assets.get_by_guid(guid, options)?,
        (None, Some(type_name), Some(qn)) => assets.get_by_qualified_name(type_name, qn, options)?,
        _ => {
            return Err(CliError::Usage(
                "either --guid or --type with --qualified-name is required".into(),
            ))
        }
    };
    write_json(out, &asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlan_core::{ClientConfig, MockTransport};
    use serde_json::{json, Value};

    fn client(mock: &MockTransport) -> AtlanClient {
        AtlanClient::new(ClientConfig::new("https://tenant.atlan.com").unwrap(), mock.clone())
    }

    fn args() -> GetArgs {
        GetArgs {
            guid: None,
            type_name: None,
            qualified_name: None,
            relationships: false,
        }
    }

    #[test]
    fn test_get_by_qualified_name() {
        let mock = MockTransport::new();
        mock.respond_json(&json!({"entity": {
            "typeName": "Table",
            "guid": "t1",
            "attributes": {"qualifiedName": "default/postgres/1/db/s/t", "name": "t"}
        }}));
        let args = GetArgs {
            type_name: Some("Table".into()),
            qualified_name: Some("default/postgres/1/db/s/t".into()),
            ..args()
        };

        let mut out = Vec::new();
        execute(&args, &client(&mock), &mut out).unwrap();

        let printed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed["guid"], json!("t1"));
        let request = mock.last_request().unwrap();
        assert_eq!(request.path(), "api/meta/entity/uniqueAttribute/type/Table");
        assert_eq!(request.query_values("ignoreRelationships"), vec!["true"]);
        assert_eq!(request.query_values("minExtInfo"), vec!["true"]);
    }

    #[test]
    fn test_get_with_relationships() {
        let mock = MockTransport::new();
        mock.respond_json(&json!({"entity": {
            "typeName": "Table",
            "guid": "t1",
            "attributes": {"qualifiedName": "default/postgres/1/db/s/t", "name": "t"}
        }}));
        let args = GetArgs {
            guid: Some("t1".into()),
            relationships: true,
            ..args()
        };

        execute(&args, &client(&mock), &mut Vec::new()).unwrap();
        let request = mock.last_request().unwrap();
        assert_eq!(request.path(), "api/meta/entity/guid/t1");
        assert_eq!(request.query_values("ignoreRelationships"), vec!["false"]);
    }

    #[test]
    fn test_get_by_guid_not_found() {
        let mock = MockTransport::new();
        mock.respond(404, r#"{"errorCode": "ATLAS-404-00-005", "errorMessage": "gone"}"#);
        let args = GetArgs {
            guid: Some("missing".into()),
            ..args()
        };

        let err = execute(&args, &client(&mock), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("ATLAN-RUST-404-001"));
    }

    #[test]
    fn test_get_requires_identifier() {
        let mock = MockTransport::new();
        let err = execute(&args(), &client(&mock), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert_eq!(mock.request_count(), 0);
    }
}
