//! # SAP ERP Assets

use crate::error::AtlanResult;
use crate::model::builder::AssetBuilder;
use crate::model::null_as_default;
use crate::model::qualified_name::connector_from_qualified_name;
use crate::model::reference::Reference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Attributes of an SAP ERP view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SapErpView {
    /// Technical name in SAP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_technical_name: Option<String>,
    /// Business-facing name in SAP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_logical_name: Option<String>,
    /// Development package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_package_name: Option<String>,
    /// Qualified name of the development package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_package_qualified_name: Option<String>,
    /// Application component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_component_name: Option<String>,
    /// Qualified name of the application component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_component_qualified_name: Option<String>,
    /// Kind of view (database view, projection, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_erp_view_type: Option<String>,
    /// Definition of the view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_erp_view_definition: Option<String>,
    /// Number of columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_erp_column_count: Option<i64>,
    /// Columns of the view.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub sap_erp_columns: BTreeSet<Reference>,
    /// The owning component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sap_erp_component: Option<Reference>,
}

impl_asset_type!(SapErpView, "SapErpView");

impl SapErpView {
    /// Builder for a new view under an SAP connection.
    pub fn creator(name: &str, connection_qualified_name: &str) -> AtlanResult<AssetBuilder<Self>> {
        let connector = connector_from_qualified_name(connection_qualified_name)?;
        let technical_name = name.to_string();
        Ok(AssetBuilder::<Self>::for_creation()
            .qualified_name(format!("{}/{}", connection_qualified_name, name))
            .name(name)
            .connection_qualified_name(connection_qualified_name)
            .connector_name(connector)
            .specific(|v| v.sap_technical_name = Some(technical_name)))
    }
}

impl AssetBuilder<SapErpView> {
    /// Sets the logical name.
    pub fn sap_logical_name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.specific(|v| v.sap_logical_name = Some(name))
    }

    /// Sets the view type.
    pub fn sap_erp_view_type(self, view_type: impl Into<String>) -> Self {
        let view_type = view_type.into();
        self.specific(|v| v.sap_erp_view_type = Some(view_type))
    }

    /// Sets the view definition.
    pub fn sap_erp_view_definition(self, definition: impl Into<String>) -> Self {
        let definition = definition.into();
        self.specific(|v| v.sap_erp_view_definition = Some(definition))
    }
}

/// Searchable fields of SAP ERP assets.
pub mod fields {
    use crate::search::fields::{KeywordField, NumericField};

    /// `sapTechnicalName`
    pub const SAP_TECHNICAL_NAME: KeywordField = KeywordField::new("sapTechnicalName");
    /// `sapLogicalName`
    pub const SAP_LOGICAL_NAME: KeywordField = KeywordField::new("sapLogicalName");
    /// `sapPackageName`
    pub const SAP_PACKAGE_NAME: KeywordField = KeywordField::new("sapPackageName");
    /// `sapComponentName`
    pub const SAP_COMPONENT_NAME: KeywordField = KeywordField::new("sapComponentName");
    /// `sapErpViewType`
    pub const SAP_ERP_VIEW_TYPE: KeywordField = KeywordField::new("sapErpViewType");
    /// `sapErpColumnCount`
    pub const SAP_ERP_COLUMN_COUNT: NumericField = NumericField::new("sapErpColumnCount");
}
