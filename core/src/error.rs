#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AtlanError` enum returned by every client operation,
//! and the `ErrorCode` catalogue of conditions the client detects itself.

use derive_more::{Display, From};
use serde::Deserialize;

/// Details carried by every API-level error.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{code}: {message}")]
pub struct ErrorDetail {
    /// Stable error code (client codes start with `ATLAN-RUST-`).
    pub code: String,
    /// Human readable message.
    pub message: String,
    /// HTTP status the error maps to, when there is one.
    pub status: Option<u16>,
}

impl ErrorDetail {
    /// Creates a detail from its parts.
    pub fn new(code: impl Into<String>, message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status,
        }
    }
}

/// The Global Error Enum.
///
/// String-carrying variants are excluded from `From` so that every error is
/// created with an explicit category.
#[derive(Debug, Display, From)]
pub enum AtlanError {
    /// The requested asset (or endpoint) does not exist.
    #[from(ignore)]
    #[display("Not found: {_0}")]
    NotFound(ErrorDetail),

    /// The request was rejected as malformed, or failed client-side validation.
    #[from(ignore)]
    #[display("Invalid request: {_0}")]
    InvalidRequest(ErrorDetail),

    /// The API key was missing or rejected.
    #[from(ignore)]
    #[display("Authentication failed: {_0}")]
    Authentication(ErrorDetail),

    /// The caller is not allowed to perform the operation.
    #[from(ignore)]
    #[display("Permission denied: {_0}")]
    Permission(ErrorDetail),

    /// The request conflicts with the current state of the asset.
    #[from(ignore)]
    #[display("Conflict: {_0}")]
    Conflict(ErrorDetail),

    /// Too many requests were issued.
    #[from(ignore)]
    #[display("Rate limit exceeded: {_0}")]
    RateLimit(ErrorDetail),

    /// Server side failure or an unexpected response.
    #[from(ignore)]
    #[display("API Error: {_0}")]
    Api(ErrorDetail),

    /// The transport could not deliver the request.
    #[from(ignore)]
    #[display("Transport Error: {_0}")]
    Transport(String),

    /// Wrapper for JSON (de)serialization errors.
    #[display("Serialization Error: {_0}")]
    Serialization(serde_json::Error),

    /// Wrapper for URL parsing errors.
    #[display("URL Error: {_0}")]
    Url(url::ParseError),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AtlanError {}

/// Helper type alias for Result using AtlanError.
pub type AtlanResult<T> = Result<T, AtlanError>;

/// Body returned by the catalog when a request fails.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServerErrorBody {
    error_code: Option<String>,
    error_message: Option<String>,
    message: Option<String>,
}

impl AtlanError {
    /// Maps a failed HTTP response onto the matching error category.
    ///
    /// The server's `errorCode` / `errorMessage` envelope is used when the body
    /// carries one; otherwise the raw body becomes the message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ServerErrorBody = serde_json::from_str(body).unwrap_or_default();
        let code = parsed
            .error_code
            .unwrap_or_else(|| format!("HTTP-{}", status));
        let message = parsed
            .error_message
            .or(parsed.message)
            .unwrap_or_else(|| body.trim().to_string());
        let detail = ErrorDetail::new(code, message, Some(status));

        match status {
            400 => AtlanError::InvalidRequest(detail),
            401 => AtlanError::Authentication(detail),
            403 => AtlanError::Permission(detail),
            404 => AtlanError::NotFound(detail),
            409 => AtlanError::Conflict(detail),
            429 => AtlanError::RateLimit(detail),
            _ => AtlanError::Api(detail),
        }
    }

    /// Returns the detail of API-level errors.
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            AtlanError::NotFound(d)
            | AtlanError::InvalidRequest(d)
            | AtlanError::Authentication(d)
            | AtlanError::Permission(d)
            | AtlanError::Conflict(d)
            | AtlanError::RateLimit(d)
            | AtlanError::Api(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the error code, if the error carries one.
    pub fn code(&self) -> Option<&str> {
        self.detail().map(|d| d.code.as_str())
    }
}

/// Conditions detected by the client itself, before or after a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// An update payload lacks fields the server requires.
    MissingRequiredUpdateParam,
    /// A request lacks a parameter the endpoint requires.
    MissingRequiredQueryParam,
    /// A qualified name does not follow the expected structure.
    InvalidQualifiedName,
    /// The connector could not be derived from a qualified name.
    UnableToParseConnector,
    /// The configured base URL is unusable.
    InvalidBaseUrl,
    /// A document of assets could not be parsed.
    InvalidAssetDocument,
    /// A configuration value could not be interpreted.
    InvalidConfigValue,
    /// No asset exists with the given GUID.
    AssetNotFoundByGuid,
    /// No asset of the given type exists with the qualified name.
    AssetNotFoundByQualifiedName,
    /// The asset exists but is not of the type requested.
    AssetNotTypeRequested,
    /// The API answered with something the client cannot interpret.
    UnexpectedResponse,
}

impl ErrorCode {
    /// Stable code string.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MissingRequiredUpdateParam => "ATLAN-RUST-400-001",
            ErrorCode::MissingRequiredQueryParam => "ATLAN-RUST-400-002",
            ErrorCode::InvalidQualifiedName => "ATLAN-RUST-400-003",
            ErrorCode::UnableToParseConnector => "ATLAN-RUST-400-004",
            ErrorCode::InvalidBaseUrl => "ATLAN-RUST-400-005",
            ErrorCode::InvalidAssetDocument => "ATLAN-RUST-400-006",
            ErrorCode::InvalidConfigValue => "ATLAN-RUST-400-007",
            ErrorCode::AssetNotFoundByGuid => "ATLAN-RUST-404-001",
            ErrorCode::AssetNotFoundByQualifiedName => "ATLAN-RUST-404-002",
            ErrorCode::AssetNotTypeRequested => "ATLAN-RUST-404-003",
            ErrorCode::UnexpectedResponse => "ATLAN-RUST-500-001",
        }
    }

    /// HTTP-like status of the condition.
    pub fn status(&self) -> u16 {
        match self {
            ErrorCode::MissingRequiredUpdateParam
            | ErrorCode::MissingRequiredQueryParam
            | ErrorCode::InvalidQualifiedName
            | ErrorCode::UnableToParseConnector
            | ErrorCode::InvalidBaseUrl
            | ErrorCode::InvalidAssetDocument
            | ErrorCode::InvalidConfigValue => 400,
            ErrorCode::AssetNotFoundByGuid
            | ErrorCode::AssetNotFoundByQualifiedName
            | ErrorCode::AssetNotTypeRequested => 404,
            ErrorCode::UnexpectedResponse => 500,
        }
    }

    fn template(&self) -> &'static str {
        match self {
            ErrorCode::MissingRequiredUpdateParam => {
                "One or more required parameters to update {0} are missing: {1}."
            }
            ErrorCode::MissingRequiredQueryParam => {
                "One or more required parameters to query {0} are missing: {1}."
            }
            ErrorCode::InvalidQualifiedName => {
                "Qualified name {0} is not valid: expected {1}."
            }
            ErrorCode::UnableToParseConnector => {
                "Unable to determine the connector from qualified name {0}."
            }
            ErrorCode::InvalidBaseUrl => "Base URL {0} cannot be used: {1}.",
            ErrorCode::InvalidAssetDocument => "Unable to read assets from {0}: {1}.",
            ErrorCode::InvalidConfigValue => "Value {1} of {0} is not valid: expected {2}.",
            ErrorCode::AssetNotFoundByGuid => "Asset with GUID {0} does not exist.",
            ErrorCode::AssetNotFoundByQualifiedName => {
                "Asset with qualifiedName {0} of type {1} does not exist."
            }
            ErrorCode::AssetNotTypeRequested => {
                "Asset with GUID {0} is not of the type requested: {1}."
            }
            ErrorCode::UnexpectedResponse => "Unexpected response from the API: {0}.",
        }
    }

    /// Renders the message template with positional parameters.
    pub fn message(&self, params: &[&str]) -> String {
        params
            .iter()
            .enumerate()
            .fold(self.template().to_string(), |msg, (i, p)| {
                msg.replace(&format!("{{{}}}", i), p)
            })
    }

    /// Builds the error for this condition.
    pub fn error(&self, params: &[&str]) -> AtlanError {
        let detail = ErrorDetail::new(self.code(), self.message(params), Some(self.status()));
        match self.status() {
            404 => AtlanError::NotFound(detail),
            400 => AtlanError::InvalidRequest(detail),
            _ => AtlanError::Api(detail),
        }
    }
}
