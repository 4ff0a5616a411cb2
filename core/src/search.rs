#![deny(missing_docs)]

//! # Search
//!
//! Index search over the catalog: the query DSL, typed field handles, the
//! request and response bodies, and `FluentSearch`, which assembles all of
//! them against a client.

/// Query expressions.
pub mod query;

/// Searchable field handles.
pub mod fields;

/// Request body.
pub mod request;

/// Response body.
pub mod response;

/// Fluent query builder.
pub mod fluent;

/// Lazy paging over results.
pub mod pager;

pub use fluent::FluentSearch;
pub use pager::AssetPager;
pub use query::{BoolQuery, Query};
pub use request::{Aggregation, IndexSearchRequest, SortItem, SortOrder};
pub use response::IndexSearchResponse;
