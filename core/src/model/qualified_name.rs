#![deny(missing_docs)]

//! # Qualified Names
//!
//! Helpers for the `/`-separated qualified names assets are keyed by.
//! Every crawled asset lives under a connection named
//! `default/<connector>/<epoch>`; child assets append their own segments.

use crate::error::{AtlanResult, ErrorCode};
use crate::model::enums::ConnectorType;
use regex::Regex;
use std::sync::OnceLock;

fn connection_re() -> &'static Regex {
    static CONNECTION_RE: OnceLock<Regex> = OnceLock::new();
    CONNECTION_RE
        .get_or_init(|| Regex::new(r"^default/([a-z0-9-]+)/(\d+)(/.*)?$").expect("Invalid regex"))
}

/// Returns the connection part (first three segments) of a qualified name.
pub fn connection_qualified_name(qualified_name: &str) -> AtlanResult<String> {
    let caps = connection_re().captures(qualified_name).ok_or_else(|| {
        ErrorCode::InvalidQualifiedName.error(&[qualified_name, "default/<connector>/<epoch>/..."])
    })?;
    Ok(format!("default/{}/{}", &caps[1], &caps[2]))
}

/// Derives the connector from a qualified name.
pub fn connector_from_qualified_name(qualified_name: &str) -> AtlanResult<ConnectorType> {
    connection_re()
        .captures(qualified_name)
        .map(|caps| ConnectorType::from_value(&caps[1]))
        .ok_or_else(|| {
            ErrorCode::InvalidQualifiedName
                .error(&[qualified_name, "default/<connector>/<epoch>/..."])
        })
}

/// Returns the qualified name of the parent (everything before the last `/`).
pub fn parent_qualified_name(qualified_name: &str) -> Option<&str> {
    qualified_name
        .rsplit_once('/')
        .map(|(parent, _)| parent)
        .filter(|parent| !parent.is_empty())
}

/// Returns the last segment of a qualified name.
pub fn name_from_qualified_name(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('/')
        .map(|(_, name)| name)
        .unwrap_or(qualified_name)
}

/// Returns the first `count` segments joined back together, if there are that many.
pub fn prefix_segments(qualified_name: &str, count: usize) -> Option<String> {
    let segments: Vec<&str> = qualified_name.split('/').collect();
    if segments.len() < count {
        return None;
    }
    Some(segments[..count].join("/"))
}
