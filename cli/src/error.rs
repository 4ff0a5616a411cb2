#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use atlan_core::AtlanError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Failure reported by the catalog client.
    #[display("{}", _0)]
    Atlan(AtlanError),

    /// JSON output could not be produced.
    #[display("JSON Error: {}", _0)]
    Json(serde_json::Error),

    /// Invalid combination of arguments.
    #[from(ignore)]
    #[display("Invalid arguments: {}", _0)]
    Usage(String),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use atlan_core::ErrorCode;

    #[test]
    fn test_display() {
        let err: CliError = ErrorCode::AssetNotFoundByGuid.error(&["g1"]).into();
        assert_eq!(
            err.to_string(),
            "Not found: ATLAN-RUST-404-001: Asset with GUID g1 does not exist."
        );
        assert_eq!(
            CliError::Usage("pick one".into()).to_string(),
            "Invalid arguments: pick one"
        );
    }
}
