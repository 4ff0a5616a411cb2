#![deny(missing_docs)]

//! # Asset Documents
//!
//! Reads assets from JSON or YAML documents. A document holds either a list
//! of entities, a `{"entities": [...]}` envelope as used by the bulk API, an
//! `{"entity": {...}}` envelope as returned by `GET`, or a single entity.

use crate::error::{AtlanResult, ErrorCode};
use crate::model::asset::Asset;
use serde_json::Value;
use std::path::Path;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON.
    Json,
    /// YAML (a superset of JSON).
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Some(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// Parses the assets held in `content`; `source` names the document in errors.
pub fn parse_assets(content: &str, format: DocumentFormat, source: &str) -> AtlanResult<Vec<Asset>> {
    let invalid = |reason: String| ErrorCode::InvalidAssetDocument.error(&[source, &reason]);

    let value: Value = match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))?,
    };

    let entities = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            if let Some(Value::Array(items)) = map.remove("entities") {
                items
            } else if let Some(entity @ Value::Object(_)) = map.remove("entity") {
                vec![entity]
            } else {
                vec![Value::Object(map)]
            }
        }
        Value::Null => Vec::new(),
        other => return Err(invalid(format!("expected a list of entities, found {}", other))),
    };

    entities
        .into_iter()
        .enumerate()
        .map(|(i, entity)| {
            serde_json::from_value(entity).map_err(|e| invalid(format!("entity {}: {}", i, e)))
        })
        .collect()
}

/// Reads the assets held in a file, choosing the format from its extension.
pub fn read_assets(path: &Path) -> AtlanResult<Vec<Asset>> {
    let source = path.display().to_string();
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        ErrorCode::InvalidAssetDocument.error(&[&source, "expected a .json, .yaml or .yml file"])
    })?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| ErrorCode::InvalidAssetDocument.error(&[&source, &e.to_string()]))?;
    log::debug!("Reading assets from {} ({:?})", source, format);
    parse_assets(&content, format, &source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::assets::AirflowDag;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.JSON")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("dags.yml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_parse_yaml_list() {
        let yaml = r#"
- typeName: AirflowDag
  attributes:
    qualifiedName: default/airflow/1/etl
    name: etl
    airflowDagSchedule: "@hourly"
- typeName: Table
  attributes:
    qualifiedName: default/postgres/1/db/s/t
    name: t
    certificateStatus: VERIFIED
"#;
        let assets = parse_assets(yaml, DocumentFormat::Yaml, "inline").unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(
            assets[0]
                .typed::<AirflowDag>()
                .unwrap()
                .airflow_dag_schedule
                .as_deref(),
            Some("@hourly")
        );
        assert_eq!(assets[1].type_name(), "Table");
    }

    #[test]
    fn test_parse_envelopes() {
        let bulk = r#"{"entities":[{"typeName":"Table","attributes":{"qualifiedName":"q","name":"n"}}]}"#;
        assert_eq!(parse_assets(bulk, DocumentFormat::Json, "bulk").unwrap().len(), 1);

        let single = r#"{"entity":{"typeName":"Table","guid":"g","attributes":{"qualifiedName":"q"}}}"#;
        let parsed = parse_assets(single, DocumentFormat::Json, "single").unwrap();
        assert_eq!(parsed[0].guid(), Some("g"));

        let bare = r#"{"typeName":"Table","attributes":{"qualifiedName":"q"}}"#;
        assert_eq!(parse_assets(bare, DocumentFormat::Json, "bare").unwrap().len(), 1);
    }

    #[test]
    fn test_parse_errors_name_the_source() {
        let err = parse_assets("[1, 2]", DocumentFormat::Json, "numbers.json").unwrap_err();
        assert_eq!(err.code(), Some("ATLAN-RUST-400-006"));
        assert!(err.detail().unwrap().message.contains("numbers.json"));
        assert!(err.detail().unwrap().message.contains("entity 0"));

        assert!(parse_assets("\"text\"", DocumentFormat::Json, "s").is_err());
        assert!(parse_assets("{not json", DocumentFormat::Json, "s").is_err());
    }
}
