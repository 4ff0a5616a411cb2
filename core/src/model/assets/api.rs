//! # API Assets
//!
//! OpenAPI specifications (`APISpec`) and the paths they define (`APIPath`).

use crate::error::AtlanResult;
use crate::model::asset_type::AssetType;
use crate::model::builder::AssetBuilder;
use crate::model::null_as_default;
use crate::model::qualified_name::{
    connection_qualified_name, connector_from_qualified_name, name_from_qualified_name,
};
use crate::model::reference::Reference;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Attributes of an API specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSpec {
    /// Kind of specification (e.g. `openapi`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec_type: Option<String>,
    /// Version of the specification format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec_version: Option<String>,
    /// Version of the API contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec_contract_version: Option<String>,
    /// URL of the terms of service.
    #[serde(rename = "apiSpecTermsOfServiceURL", skip_serializing_if = "Option::is_none")]
    pub api_spec_terms_of_service_url: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec_contact_email: Option<String>,
    /// Contact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec_contact_name: Option<String>,
    /// Contact URL.
    #[serde(rename = "apiSpecContactURL", skip_serializing_if = "Option::is_none")]
    pub api_spec_contact_url: Option<String>,
    /// License name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec_license_name: Option<String>,
    /// License URL.
    #[serde(rename = "apiSpecLicenseURL", skip_serializing_if = "Option::is_none")]
    pub api_spec_license_url: Option<String>,
    /// Alias of the service exposing the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec_service_alias: Option<String>,
    /// External documentation links, by label.
    #[serde(
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub api_external_docs: IndexMap<String, String>,
    /// Paths defined by the specification.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub api_paths: BTreeSet<Reference>,
}

impl_asset_type!(ApiSpec, "APISpec");

impl ApiSpec {
    /// Builder for a new specification under a connection.
    pub fn creator(name: &str, connection_qualified_name: &str) -> AtlanResult<AssetBuilder<Self>> {
        let connector = connector_from_qualified_name(connection_qualified_name)?;
        Ok(AssetBuilder::<Self>::for_creation()
            .qualified_name(format!("{}/{}", connection_qualified_name, name))
            .name(name)
            .connection_qualified_name(connection_qualified_name)
            .connector_name(connector))
    }
}

impl AssetBuilder<ApiSpec> {
    /// Sets the specification format.
    pub fn api_spec_type(self, spec_type: impl Into<String>) -> Self {
        let spec_type = spec_type.into();
        self.specific(|s| s.api_spec_type = Some(spec_type))
    }

    /// Sets the specification format version.
    pub fn api_spec_version(self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.specific(|s| s.api_spec_version = Some(version))
    }

    /// Sets the contact email.
    pub fn api_spec_contact_email(self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.specific(|s| s.api_spec_contact_email = Some(email))
    }

    /// Links a path to the specification.
    pub fn api_path(self, path: Reference) -> Self {
        self.specific(|s| {
            s.api_paths.insert(path);
        })
    }
}

/// Attributes of a path within an API specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiPath {
    /// One-line summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_path_summary: Option<String>,
    /// The path as written in the specification (e.g. `/pets/{id}`).
    #[serde(rename = "apiPathRawURI", skip_serializing_if = "Option::is_none")]
    pub api_path_raw_uri: Option<String>,
    /// Whether the path contains template parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_path_is_templated: Option<bool>,
    /// HTTP methods available on the path.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub api_path_available_operations: BTreeSet<String>,
    /// Response codes and their descriptions.
    #[serde(
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub api_path_available_response_codes: IndexMap<String, String>,
    /// Whether the path is exposed through an ingress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_path_is_ingress_exposed: Option<bool>,
    /// Name of the owning specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec_name: Option<String>,
    /// Qualified name of the owning specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec_qualified_name: Option<String>,
    /// The owning specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_spec: Option<Reference>,
}

impl_asset_type!(ApiPath, "APIPath");

impl ApiPath {
    /// Builder for a new path within the specification `spec_qualified_name`.
    pub fn creator(path_raw_uri: &str, spec_qualified_name: &str) -> AtlanResult<AssetBuilder<Self>> {
        let connection = connection_qualified_name(spec_qualified_name)?;
        let connector = connector_from_qualified_name(&connection)?;
        let spec_name = name_from_qualified_name(spec_qualified_name).to_string();
        let templated = path_raw_uri.contains('{');
        let raw_uri = path_raw_uri.to_string();
        let spec_qn = spec_qualified_name.to_string();

        Ok(AssetBuilder::<Self>::for_creation()
            .qualified_name(format!("{}{}", spec_qualified_name, path_raw_uri))
            .name(path_raw_uri)
            .connection_qualified_name(connection)
            .connector_name(connector)
            .specific(|p| {
                p.api_path_raw_uri = Some(raw_uri);
                p.api_path_is_templated = Some(templated);
                p.api_spec_name = Some(spec_name);
                p.api_spec = Some(ApiSpec::ref_by_qualified_name(&spec_qn));
                p.api_spec_qualified_name = Some(spec_qn);
            }))
    }
}

impl AssetBuilder<ApiPath> {
    /// Sets the summary.
    pub fn api_path_summary(self, summary: impl Into<String>) -> Self {
        let summary = summary.into();
        self.specific(|p| p.api_path_summary = Some(summary))
    }

    /// Adds available HTTP methods.
    pub fn api_path_available_operations<I, S>(self, operations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let operations: Vec<String> = operations.into_iter().map(Into::into).collect();
        self.specific(|p| p.api_path_available_operations.extend(operations))
    }
}

/// Searchable fields of API assets.
pub mod fields {
    use crate::search::fields::{BooleanField, KeywordField, RelationField};

    /// `apiSpecType`
    pub const API_SPEC_TYPE: KeywordField = KeywordField::new("apiSpecType");
    /// `apiSpecVersion`
    pub const API_SPEC_VERSION: KeywordField = KeywordField::new("apiSpecVersion");
    /// `apiPathRawURI`
    pub const API_PATH_RAW_URI: KeywordField = KeywordField::new("apiPathRawURI");
    /// `apiPathAvailableOperations`
    pub const API_PATH_AVAILABLE_OPERATIONS: KeywordField =
        KeywordField::new("apiPathAvailableOperations");
    /// `apiPathIsTemplated`
    pub const API_PATH_IS_TEMPLATED: BooleanField = BooleanField::new("apiPathIsTemplated");
    /// `apiSpecQualifiedName`
    pub const API_SPEC_QUALIFIED_NAME: KeywordField = KeywordField::new("apiSpecQualifiedName");
    /// `apiPaths`
    pub const API_PATHS: RelationField = RelationField::new("apiPaths");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::asset::Asset;
    use crate::model::enums::ConnectorType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const CONNECTION: &str = "default/api/1700000000";

    #[test]
    fn test_spec_creator() {
        let spec = ApiSpec::creator("petstore", CONNECTION)
            .unwrap()
            .api_spec_type("openapi")
            .api_spec_version("3.0.0")
            .build()
            .unwrap();
        assert_eq!(spec.type_name(), "APISpec");
        assert_eq!(spec.qualified_name(), Some("default/api/1700000000/petstore"));
        assert_eq!(spec.attributes.connector_name, Some(ConnectorType::Api));
        assert!(spec.is_new());
    }

    #[test]
    fn test_spec_creator_rejects_bad_connection() {
        assert!(ApiSpec::creator("petstore", "api/petstore").is_err());
    }

    #[test]
    fn test_path_creator() {
        let path = ApiPath::creator("/pets/{id}", "default/api/1700000000/petstore")
            .unwrap()
            .api_path_available_operations(["GET", "DELETE"])
            .build()
            .unwrap();
        assert_eq!(
            path.qualified_name(),
            Some("default/api/1700000000/petstore/pets/{id}")
        );
        assert_eq!(
            path.attributes.connection_qualified_name.as_deref(),
            Some(CONNECTION)
        );

        let details = path.typed::<ApiPath>().unwrap();
        assert_eq!(details.api_path_is_templated, Some(true));
        assert_eq!(details.api_spec_name.as_deref(), Some("petstore"));
        assert_eq!(
            serde_json::to_value(details.api_spec.as_ref().unwrap()).unwrap(),
            json!({
                "typeName": "APISpec",
                "uniqueAttributes": {"qualifiedName": "default/api/1700000000/petstore"}
            })
        );
    }

    #[test]
    fn test_wire_names() {
        let raw = json!({
            "typeName": "APIPath",
            "guid": "p1",
            "attributes": {
                "qualifiedName": "default/api/1/spec/pets",
                "name": "/pets",
                "apiPathRawURI": "/pets",
                "apiPathAvailableResponseCodes": {"200": "OK", "404": "Missing"},
                "apiPathAvailableOperations": ["POST", "GET"]
            }
        });
        let asset: Asset = serde_json::from_value(raw).unwrap();
        let path = asset.typed::<ApiPath>().unwrap();
        assert_eq!(path.api_path_raw_uri.as_deref(), Some("/pets"));
        assert_eq!(path.api_path_available_response_codes["404"], "Missing");
        let ops: Vec<_> = path.api_path_available_operations.iter().cloned().collect();
        assert_eq!(ops, vec!["GET".to_string(), "POST".to_string()]);
    }
}
