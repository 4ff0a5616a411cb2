#![deny(missing_docs)]

//! # Index Search Request
//!
//! Body of the index search endpoint: the DSL (query, paging, sorting,
//! aggregations) plus which attributes to return.

use crate::search::query::Query;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::json;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Sort on one field; serializes as `{"<field>": {"order": "asc"}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem {
    /// Field sorted on.
    pub field: String,
    /// Direction.
    pub order: SortOrder,
}

impl SortItem {
    /// Creates a sort item.
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

impl Serialize for SortItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &json!({ "order": self.order }))?;
        map.end()
    }
}

/// Aggregation computed over the matching assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregation {
    /// Counts per distinct value of a keyword field.
    Terms {
        /// Field aggregated.
        field: String,
        /// Maximum number of buckets.
        size: Option<u32>,
    },
}

impl Serialize for Aggregation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = match self {
            Aggregation::Terms { field, size: Some(size) } => {
                json!({ "terms": { "field": field, "size": size } })
            }
            Aggregation::Terms { field, size: None } => json!({ "terms": { "field": field } }),
        };
        value.serialize(serializer)
    }
}

/// Query, paging, sorting and aggregations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dsl {
    /// Offset of the first result.
    pub from: u32,
    /// Page size.
    pub size: u32,
    /// Query selecting the assets.
    pub query: Query,
    /// Sort order, first item first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortItem>,
    /// Aggregations, by name.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub aggregations: IndexMap<String, Aggregation>,
    /// Count every match rather than stopping at 10 000.
    pub track_total_hits: bool,
}

impl Default for Dsl {
    fn default() -> Self {
        Self {
            from: 0,
            size: 100,
            query: Query::MatchAll,
            sort: Vec::new(),
            aggregations: IndexMap::new(),
            track_total_hits: true,
        }
    }
}

/// Full index search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSearchRequest {
    /// The DSL.
    pub dsl: Dsl,
    /// Attributes to return on each asset.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// Attributes to return on each related asset.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relation_attributes: Vec<String>,
    /// Keep the search out of the audit log.
    pub suppress_logs: bool,
    /// Return the relevance score of each result.
    pub show_search_score: bool,
    /// Leave term assignments out of the results.
    pub exclude_meanings: bool,
    /// Leave tags out of the results.
    pub exclude_classifications: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_request() {
        let mut request = IndexSearchRequest::default();
        request.dsl.size = 20;
        request.dsl.sort.push(SortItem::new("__guid", SortOrder::Asc));
        request.dsl.aggregations.insert(
            "types".into(),
            Aggregation::Terms {
                field: "__typeName.keyword".into(),
                size: Some(10),
            },
        );
        request.attributes.push("ownerUsers".into());
        request.suppress_logs = true;

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "dsl": {
                    "from": 0,
                    "size": 20,
                    "query": {"match_all": {}},
                    "sort": [{"__guid": {"order": "asc"}}],
                    "aggregations": {"types": {"terms": {"field": "__typeName.keyword", "size": 10}}},
                    "track_total_hits": true
                },
                "attributes": ["ownerUsers"],
                "suppressLogs": true,
                "showSearchScore": false,
                "excludeMeanings": false,
                "excludeClassifications": false
            })
        );
    }
}
