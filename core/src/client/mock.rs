use crate::client::{ApiRequest, ApiResponse, Transport};
use crate::error::{AtlanError, AtlanResult};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<ApiResponse>,
    requests: Vec<ApiRequest>,
}

/// Transport that records requests and replays queued responses in order.
///
/// Clones share their state, so a test can hand one clone to the client and
/// inspect the recorded requests through another.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    /// Creates a transport with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.state
            .borrow_mut()
            .responses
            .push_back(ApiResponse::new(status, body));
        self
    }

    /// Queues a `200` response with a JSON body.
    pub fn respond_json(&self, body: &Value) -> &Self {
        self.respond(200, body.to_string())
    }

    /// Requests sent so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state.borrow().requests.last().cloned()
    }

    /// Number of requests sent so far.
    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }

    /// Number of queued responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.state.borrow().responses.len()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &ApiRequest) -> AtlanResult<ApiResponse> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());
        state.responses.pop_front().ok_or_else(|| {
            AtlanError::Transport(format!(
                "no response queued for {} {}",
                request.method,
                request.path()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpMethod;

    #[test]
    fn test_replays_in_order_and_records() {
        let mock = MockTransport::new();
        mock.respond(200, "first").respond(500, "second");
        let request = ApiRequest::new(HttpMethod::Get, &["a"]);

        assert_eq!(mock.send(&request).unwrap().body, "first");
        assert_eq!(mock.send(&request).unwrap().status, 500);
        assert!(matches!(
            mock.send(&request).unwrap_err(),
            AtlanError::Transport(_)
        ));
        assert_eq!(mock.request_count(), 3);
        assert_eq!(mock.pending(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let mock = MockTransport::new();
        let handle = mock.clone();
        mock.respond(200, "{}");
        handle
            .send(&ApiRequest::new(HttpMethod::Post, &["b"]))
            .unwrap();
        assert_eq!(mock.last_request().unwrap().method, HttpMethod::Post);
    }
}
