#![deny(missing_docs)]

//! # Client
//!
//! `AtlanClient` issues requests to the catalog's REST API through a
//! `Transport`. The library only describes requests (`ApiRequest`) and
//! interprets responses; moving bytes over the network is left to the
//! transport, so tests drive the client with a `MockTransport` and the CLI
//! plugs in an HTTP adapter.

/// Request constructors for each endpoint.
pub mod endpoints;

/// Base operations on assets.
pub mod assets;

/// In-memory transport replaying canned responses.
pub mod mock;

pub use assets::{AssetClient, GetOptions};
pub use mock::MockTransport;

use crate::config::ClientConfig;
use crate::error::{AtlanError, AtlanResult, ErrorCode};
use crate::search::FluentSearch;
use derive_more::Display;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HttpMethod {
    /// `GET`
    #[display("GET")]
    Get,
    /// `POST`
    #[display("POST")]
    Post,
    /// `PUT`
    #[display("PUT")]
    Put,
    /// `DELETE`
    #[display("DELETE")]
    Delete,
}

/// A request to the catalog API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Method.
    pub method: HttpMethod,
    /// Path segments, unencoded.
    pub segments: Vec<String>,
    /// Query parameters in order; keys may repeat.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request for the path made of `segments`.
    pub fn new(method: HttpMethod, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Sets the JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path relative to the base URL, segments joined with `/`.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Values of a query parameter, in order.
    pub fn query_values(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Full URL of the request; segments and query are percent-encoded.
    pub fn url(&self, base: &Url) -> AtlanResult<Url> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ErrorCode::InvalidBaseUrl.error(&[base.as_str(), "it cannot have a path"])
            })?;
            segments.pop_if_empty();
            segments.extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// Raw response from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body as text.
    pub body: String,
}

impl ApiResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers requests to the API.
///
/// Implementations only report failures to deliver; HTTP error statuses
/// are returned as responses and mapped by the client.
pub trait Transport {
    /// Sends the request and returns the raw response.
    fn send(&self, request: &ApiRequest) -> AtlanResult<ApiResponse>;
}

/// Entry point to the catalog API.
pub struct AtlanClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl std::fmt::Debug for AtlanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtlanClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AtlanClient {
    /// Creates a client sending requests through `transport`.
    pub fn new(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Box::new(transport),
        }
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a request, mapping error statuses onto `AtlanError`.
    fn send(&self, request: &ApiRequest) -> AtlanResult<ApiResponse> {
        log::debug!("{} {}", request.method, request.path());
        let response = self.transport.send(request)?;
        log::debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.path(),
            response.status,
            response.body.len()
        );
        if !response.is_success() {
            return Err(AtlanError::from_response(response.status, &response.body));
        }
        Ok(response)
    }

    /// Sends a request and deserializes the response body.
    pub fn call<T: DeserializeOwned>(&self, request: &ApiRequest) -> AtlanResult<T> {
        let response = self.send(request)?;
        if response.body.trim().is_empty() {
            return Err(ErrorCode::UnexpectedResponse
                .error(&[&format!("empty body from {}", request.path())]));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Sends a request whose response body is not needed.
    pub fn call_empty(&self, request: &ApiRequest) -> AtlanResult<()> {
        self.send(request).map(|_| ())
    }

    /// Base operations on assets.
    pub fn assets(&self) -> AssetClient<'_> {
        AssetClient::new(self)
    }

    /// Starts a search over active assets of any type.
    pub fn select(&self) -> FluentSearch<'_> {
        FluentSearch::new(self).active_assets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client(mock: &MockTransport) -> AtlanClient {
        let config = ClientConfig::new("https://tenant.atlan.com").unwrap();
        AtlanClient::new(config, mock.clone())
    }

    #[test]
    fn test_url_encodes_segments_and_query() {
        let base = Url::parse("https://tenant.atlan.com/").unwrap();
        let request = ApiRequest::new(HttpMethod::Get, &["api", "meta", "entity", "guid", "a b/c"])
            .query("minExtInfo", "false")
            .query("guid", "1")
            .query("guid", "2");
        assert_eq!(
            request.url(&base).unwrap().as_str(),
            "https://tenant.atlan.com/api/meta/entity/guid/a%20b%2Fc?minExtInfo=false&guid=1&guid=2"
        );
        assert_eq!(request.query_values("guid"), vec!["1", "2"]);
    }

    #[test]
    fn test_url_keeps_base_path() {
        let base = Url::parse("https://proxy.example.com/atlan").unwrap();
        let request = ApiRequest::new(HttpMethod::Post, &["api", "meta", "search", "indexsearch"]);
        assert_eq!(
            request.url(&base).unwrap().as_str(),
            "https://proxy.example.com/atlan/api/meta/search/indexsearch"
        );
    }

    #[test]
    fn test_call_deserializes() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"value": 3}"#);
        let value: Value = client(&mock)
            .call(&ApiRequest::new(HttpMethod::Get, &["x"]))
            .unwrap();
        assert_eq!(value, json!({"value": 3}));
        assert_eq!(mock.requests()[0].path(), "x");
    }

    #[test]
    fn test_call_maps_error_status() {
        let mock = MockTransport::new();
        mock.respond(
            404,
            r#"{"errorCode":"ATLAS-404-00-005","errorMessage":"not found"}"#,
        );
        let err = client(&mock)
            .call::<Value>(&ApiRequest::new(HttpMethod::Get, &["x"]))
            .unwrap_err();
        assert!(matches!(err, AtlanError::NotFound(_)));
        assert_eq!(err.code(), Some("ATLAS-404-00-005"));
    }

    #[test]
    fn test_call_rejects_empty_body() {
        let mock = MockTransport::new();
        mock.respond(200, "");
        let err = client(&mock)
            .call::<Value>(&ApiRequest::new(HttpMethod::Get, &["x"]))
            .unwrap_err();
        assert_eq!(err.code(), Some("ATLAN-RUST-500-001"));
    }

    #[test]
    fn test_call_empty_ignores_body() {
        let mock = MockTransport::new();
        mock.respond(204, "");
        assert!(client(&mock)
            .call_empty(&ApiRequest::new(HttpMethod::Delete, &["x"]))
            .is_ok());
    }
}
