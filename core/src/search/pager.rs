//! # Asset Pager
//!
//! Iterates over every result of a search, requesting the next page only
//! when the current one is used up.

use crate::client::AtlanClient;
use crate::error::AtlanResult;
use crate::model::asset::Asset;
use crate::search::request::IndexSearchRequest;
use std::collections::{HashSet, VecDeque};

/// Lazy iterator over search results.
///
/// Paging is by offset; results already yielded (same GUID) are skipped, as
/// an asset changed between two page requests can shift into a later page.
#[derive(Debug)]
pub struct AssetPager<'c> {
    client: &'c AtlanClient,
    request: IndexSearchRequest,
    buffer: VecDeque<Asset>,
    seen: HashSet<String>,
    approximate_count: Option<u64>,
    done: bool,
}

impl<'c> AssetPager<'c> {
    /// Pages through the results of `request`, starting at its offset.
    pub fn new(client: &'c AtlanClient, request: IndexSearchRequest) -> Self {
        Self {
            client,
            request,
            buffer: VecDeque::new(),
            seen: HashSet::new(),
            approximate_count: None,
            done: false,
        }
    }

    /// Total reported by the last page, once one has been fetched.
    pub fn approximate_count(&self) -> Option<u64> {
        self.approximate_count
    }

    fn fetch_page(&mut self) -> AtlanResult<()> {
        let size = self.request.dsl.size;
        let from = self.request.dsl.from;
        log::debug!("Fetching results {}..{}", from, from.saturating_add(size));
        let response = self.client.assets().search(&self.request)?;
        let fetched = response.entities.len();

        self.approximate_count = Some(response.approximate_count);
        match from.checked_add(size) {
            Some(next) => {
                self.request.dsl.from = next;
                if fetched < size as usize || u64::from(next) >= response.approximate_count {
                    self.done = true;
                }
            }
            None => self.done = true,
        }
        self.buffer.extend(response.entities);
        Ok(())
    }
}

impl Iterator for AssetPager<'_> {
    type Item = AtlanResult<Asset>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(asset) = self.buffer.pop_front() {
                if let Some(guid) = asset.guid() {
                    if !self.seen.insert(guid.to_string()) {
                        log::warn!("Skipping {} already returned by an earlier page", guid);
                        continue;
                    }
                }
                return Some(Ok(asset));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.fetch_page() {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockTransport;
    use crate::config::ClientConfig;
    use serde_json::{json, Value};

    fn page(count: u64, guids: &[&str]) -> Value {
        let entities: Vec<Value> = guids
            .iter()
            .map(|g| json!({"typeName": "Table", "guid": g, "attributes": {"qualifiedName": g, "name": g}}))
            .collect();
        json!({"approximateCount": count, "entities": entities})
    }

    fn client(mock: &MockTransport) -> AtlanClient {
        let config = ClientConfig::new("https://tenant.atlan.com")
            .unwrap()
            .with_page_size(2);
        AtlanClient::new(config, mock.clone())
    }

    #[test]
    fn test_pages_until_short_page() {
        let mock = MockTransport::new();
        mock.respond_json(&page(5, &["a", "b"]))
            .respond_json(&page(5, &["c", "d"]))
            .respond_json(&page(5, &["e"]));
        let client = client(&mock);

        let guids: Vec<String> = client
            .select()
            .stream()
            .map(|r| r.unwrap().guid().unwrap().to_string())
            .collect();
        assert_eq!(guids, vec!["a", "b", "c", "d", "e"]);

        let offsets: Vec<Value> = mock
            .requests()
            .iter()
            .map(|r| r.body.as_ref().unwrap()["dsl"]["from"].clone())
            .collect();
        assert_eq!(offsets, vec![json!(0), json!(2), json!(4)]);
    }

    #[test]
    fn test_stops_at_approximate_count() {
        let mock = MockTransport::new();
        mock.respond_json(&page(2, &["a", "b"]));
        let client = client(&mock);
        assert_eq!(client.select().stream().count(), 2);
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn test_skips_duplicates() {
        let mock = MockTransport::new();
        mock.respond_json(&page(4, &["a", "b"]))
            .respond_json(&page(4, &["b", "c"]));
        let client = client(&mock);
        let guids: Vec<String> = client
            .select()
            .stream()
            .map(|r| r.unwrap().guid().unwrap().to_string())
            .collect();
        assert_eq!(guids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_error_ends_iteration() {
        let mock = MockTransport::new();
        mock.respond_json(&page(10, &["a", "b"]))
            .respond(500, "boom");
        let client = client(&mock);
        let mut pager = client.select().stream();
        assert!(pager.next().unwrap().is_ok());
        assert!(pager.next().unwrap().is_ok());
        assert!(pager.next().unwrap().is_err());
        assert!(pager.next().is_none());
        assert_eq!(pager.approximate_count(), Some(10));
    }

    #[test]
    fn test_stops_when_offset_would_overflow() {
        let mock = MockTransport::new();
        mock.respond_json(&page(u64::MAX, &["a", "b"]));
        let client = client(&mock);
        let mut request = client.select().to_request();
        request.dsl.from = u32::MAX - 1;

        let pager = AssetPager::new(&client, request);
        assert_eq!(pager.count(), 2);
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn test_empty_result() {
        let mock = MockTransport::new();
        mock.respond_json(&page(0, &[]));
        let client = client(&mock);
        assert!(client.select().stream().next().is_none());
    }
}
