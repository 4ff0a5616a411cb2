#![deny(missing_docs)]

//! # Certify Command
//!
//! Sets or clears the certificate of an asset.

use crate::error::{CliError, CliResult};
use crate::output::write_updated;
use atlan_core::{AtlanClient, CertificateStatus};
use std::io::Write;

/// Arguments for the certify command.
#[derive(clap::Args, Debug, Clone)]
pub struct CertifyArgs {
    /// Type of the asset (e.g. `Table`).
    #[clap(long = "type")]
    pub type_name: String,

    /// Qualified name of the asset.
    #[clap(long)]
    pub qualified_name: String,

    /// Certificate to set: `DRAFT`, `VERIFIED` or `DEPRECATED`.
    #[clap(long, required_unless_present = "remove")]
    pub status: Option<CertificateStatus>,

    /// Message shown alongside the certificate.
    #[clap(long, conflicts_with = "remove")]
    pub message: Option<String>,

    /// Clear the certificate instead of setting one.
    #[clap(long, conflicts_with = "status", requires = "name")]
    pub remove: bool,

    /// Name of the asset (needed when clearing).
    #[clap(long)]
    pub name: Option<String>,
}

/// Executes the certificate change.
pub fn execute(args: &CertifyArgs, client: &AtlanClient, out: &mut impl Write) -> CliResult<()> {
    let assets = client.assets();
    let updated = if args.remove {
        let name = args
            .name
            .as_deref()
            .ok_or_else(|| CliError::Usage("--remove requires --name".into()))?;
        assets.remove_certificate(&args.type_name, &args.qualified_name, name)?
    } else {
        let status = args
            .status
            .ok_or_else(|| CliError::Usage("--status is required".into()))?;
        assets.update_certificate(
            &args.type_name,
            &args.qualified_name,
            status,
            args.message.as_deref(),
        )?
    };
    write_updated(out, updated.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlan_core::{ClientConfig, MockTransport};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn client(mock: &MockTransport) -> AtlanClient {
        AtlanClient::new(ClientConfig::new("https://tenant.atlan.com").unwrap(), mock.clone())
    }

    fn args() -> CertifyArgs {
        CertifyArgs {
            type_name: "Table".into(),
            qualified_name: "default/postgres/1/db/s/t".into(),
            status: None,
            message: None,
            remove: false,
            name: None,
        }
    }

    #[test]
    fn test_certify() {
        let mock = MockTransport::new();
        mock.respond_json(&json!({"mutatedEntities": {"PARTIAL_UPDATE": [
            {"typeName": "Table", "guid": "t1", "attributes": {"qualifiedName": "default/postgres/1/db/s/t", "name": "t"}}
        ]}}));
        let args = CertifyArgs {
            status: Some(CertificateStatus::Verified),
            message: Some("Reviewed".into()),
            ..args()
        };

        let mut out = Vec::new();
        execute(&args, &client(&mock), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Updated: Table default/postgres/1/db/s/t (t1)\n"
        );
        let body = mock.last_request().unwrap().body.unwrap();
        assert_eq!(body["entities"][0]["attributes"]["certificateStatus"], json!("VERIFIED"));
        assert_eq!(
            body["entities"][0]["attributes"]["certificateStatusMessage"],
            json!("Reviewed")
        );
    }

    #[test]
    fn test_remove_certificate() {
        let mock = MockTransport::new();
        mock.respond_json(&json!({"mutatedEntities": {}}));
        let args = CertifyArgs {
            remove: true,
            name: Some("t".into()),
            ..args()
        };

        let mut out = Vec::new();
        execute(&args, &client(&mock), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No changes.\n");
        let body = mock.last_request().unwrap().body.unwrap();
        assert_eq!(body["entities"][0]["attributes"]["certificateStatus"], Value::Null);
        assert_eq!(body["entities"][0]["attributes"]["name"], json!("t"));
    }

    #[test]
    fn test_remove_needs_name() {
        let mock = MockTransport::new();
        let args = CertifyArgs {
            remove: true,
            ..args()
        };
        let err = execute(&args, &client(&mock), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }
}
