#![deny(missing_docs)]

//! # Index Search Response

use crate::model::asset::Asset;
use crate::model::null_as_default;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// One bucket of a terms aggregation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AggregationBucket {
    /// Distinct value.
    pub key: Value,
    /// Number of assets holding it.
    #[serde(default)]
    pub doc_count: u64,
}

/// Result of one aggregation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AggregationResult {
    /// Buckets, most frequent first.
    #[serde(deserialize_with = "null_as_default")]
    pub buckets: Vec<AggregationBucket>,
}

/// A page of search results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexSearchResponse {
    /// Estimate of the total number of matches.
    pub approximate_count: u64,
    /// Assets on this page.
    #[serde(deserialize_with = "null_as_default")]
    pub entities: Vec<Asset>,
    /// Aggregation results, by name.
    #[serde(deserialize_with = "null_as_default")]
    pub aggregations: IndexMap<String, AggregationResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_page() {
        let raw = json!({
            "queryType": "INDEX",
            "searchParameters": {},
            "approximateCount": 2,
            "entities": [
                {"typeName": "Table", "guid": "t1", "attributes": {"qualifiedName": "a", "name": "a"}},
                {"typeName": "AirflowDag", "guid": "d1", "attributes": {"qualifiedName": "b", "name": "b"}}
            ],
            "aggregations": {
                "types": {"buckets": [{"key": "Table", "doc_count": 1}, {"key": "AirflowDag", "doc_count": 1}]}
            }
        });
        let page: IndexSearchResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(page.approximate_count, 2);
        assert_eq!(page.entities[1].type_name(), "AirflowDag");
        assert_eq!(page.aggregations["types"].buckets[0].key, json!("Table"));
    }

    #[test]
    fn test_parse_empty_page() {
        let page: IndexSearchResponse =
            serde_json::from_value(json!({"approximateCount": 0, "entities": null})).unwrap();
        assert!(page.entities.is_empty());
        assert!(page.aggregations.is_empty());
    }
}
