//! # HTTP Transport
//!
//! Sends `ApiRequest`s over HTTPS with `ureq`. Error statuses are returned
//! as responses so the client can map them.

use atlan_core::{ApiRequest, ApiResponse, AtlanError, AtlanResult, ClientConfig, HttpMethod, Transport};
use ureq::RequestBuilder;

/// Blocking HTTP transport.
pub struct UreqTransport {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl UreqTransport {
    /// Creates a transport for the configured tenant.
    pub fn new(config: &ClientConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            config: config.clone(),
        }
    }

    fn headers<B>(&self, builder: RequestBuilder<B>) -> RequestBuilder<B> {
        let builder = builder
            .header("Accept", "application/json")
            .header("User-Agent", self.config.user_agent());
        match self.config.api_key() {
            Some(key) => builder.header("Authorization", format!("Bearer {}", key)),
            None => builder,
        }
    }
}

fn transport_error(e: ureq::Error) -> AtlanError {
    AtlanError::Transport(e.to_string())
}

impl Transport for UreqTransport {
    fn send(&self, request: &ApiRequest) -> AtlanResult<ApiResponse> {
        let url = request.url(self.config.base_url())?;
        let body = request
            .body
            .as_ref()
            .map(|b| b.to_string())
            .unwrap_or_default();

        let sent = match request.method {
            HttpMethod::Get => self.headers(self.agent.get(url.as_str())).call(),
            HttpMethod::Delete => self.headers(self.agent.delete(url.as_str())).call(),
            HttpMethod::Post => self
                .headers(self.agent.post(url.as_str()))
                .header("Content-Type", "application/json")
                .send(body),
            HttpMethod::Put => self
                .headers(self.agent.put(url.as_str()))
                .header("Content-Type", "application/json")
                .send(body),
        };

        let mut response = sent.map_err(transport_error)?;
        let status = response.status().as_u16();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(transport_error)?;
        Ok(ApiResponse::new(status, text))
    }
}
