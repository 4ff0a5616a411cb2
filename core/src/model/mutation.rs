#![deny(missing_docs)]

//! # Mutation Responses
//!
//! What the API returns after saving or deleting entities: the entities
//! touched, grouped by kind of change, and the real GUIDs assigned to
//! placeholders.

use crate::model::asset::Asset;
use crate::model::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entities touched by a mutation, grouped by kind of change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct MutatedEntities {
    /// Newly created entities.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub create: Vec<Asset>,
    /// Entities updated in full.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub update: Vec<Asset>,
    /// Entities updated in part.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub partial_update: Vec<Asset>,
    /// Archived or purged entities.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub delete: Vec<Asset>,
}

/// Response of a create, update or delete call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MutationResponse {
    /// Entities touched, by kind of change.
    #[serde(deserialize_with = "null_as_default")]
    pub mutated_entities: MutatedEntities,
    /// Placeholder GUID to assigned GUID.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "null_as_default")]
    pub guid_assignments: BTreeMap<String, String>,
}

impl MutationResponse {
    /// Assets created by the call.
    pub fn created_assets(&self) -> &[Asset] {
        &self.mutated_entities.create
    }

    /// Assets fully updated by the call.
    pub fn updated_assets(&self) -> &[Asset] {
        &self.mutated_entities.update
    }

    /// Assets partially updated by the call.
    pub fn partially_updated_assets(&self) -> &[Asset] {
        &self.mutated_entities.partial_update
    }

    /// Assets archived or purged by the call.
    pub fn deleted_assets(&self) -> &[Asset] {
        &self.mutated_entities.delete
    }

    /// Real GUID assigned to a placeholder.
    pub fn assigned_guid(&self, placeholder: &str) -> Option<&str> {
        self.guid_assignments.get(placeholder).map(String::as_str)
    }

    /// The first updated asset, falling back to partial updates and then creates.
    pub fn first_updated(&self) -> Option<&Asset> {
        self.updated_assets()
            .first()
            .or_else(|| self.partially_updated_assets().first())
            .or_else(|| self.created_assets().first())
    }

    /// True when nothing was touched.
    pub fn is_empty(&self) -> bool {
        self.mutated_entities == MutatedEntities::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn header(type_name: &str, guid: &str, qn: &str) -> serde_json::Value {
        json!({
            "typeName": type_name,
            "guid": guid,
            "status": "ACTIVE",
            "attributes": {"qualifiedName": qn, "name": qn.rsplit('/').next().unwrap()},
            "classificationNames": [],
            "meaningNames": [],
            "meanings": [],
            "isIncomplete": false,
            "labels": []
        })
    }

    #[test]
    fn test_parse_response() {
        let raw = json!({
            "mutatedEntities": {
                "CREATE": [header("AirflowTask", "g-task", "default/airflow/1/etl/load")],
                "PARTIAL_UPDATE": [header("AirflowDag", "g-dag", "default/airflow/1/etl")]
            },
            "guidAssignments": {"-1": "g-task"}
        });
        let response: MutationResponse = serde_json::from_value(raw).unwrap();

        assert_eq!(response.created_assets().len(), 1);
        assert!(response.updated_assets().is_empty());
        assert_eq!(response.assigned_guid("-1"), Some("g-task"));
        assert_eq!(response.assigned_guid("-2"), None);
        assert_eq!(
            response.first_updated().and_then(Asset::qualified_name),
            Some("default/airflow/1/etl")
        );
        assert!(!response.is_empty());
    }

    #[test]
    fn test_first_updated_falls_back_to_create() {
        let raw = json!({
            "mutatedEntities": {"CREATE": [header("Table", "t1", "default/postgres/1/db/s/t")]}
        });
        let response: MutationResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.first_updated().and_then(Asset::guid), Some("t1"));
    }

    #[test]
    fn test_empty_response() {
        let response: MutationResponse =
            serde_json::from_value(json!({"mutatedEntities": null})).unwrap();
        assert!(response.is_empty());
        assert!(response.first_updated().is_none());
        assert!(response.deleted_assets().is_empty());
    }
}
