//! # BI Assets
//!
//! Power BI dashboards. They are only ever crawled, so there is no creator;
//! use `PowerBIDashboard::updater` to curate an existing one.

use crate::model::builder::AssetBuilder;
use crate::model::null_as_default;
use crate::model::reference::Reference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Attributes of a Power BI dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerBIDashboard {
    /// Qualified name of the workspace holding the dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_qualified_name: Option<String>,
    /// Link to the dashboard in Power BI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    /// Number of tiles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_count: Option<i64>,
    /// Endorsement set in Power BI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_bi_endorsement: Option<String>,
    /// The owning workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<Reference>,
    /// Tiles on the dashboard.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub tiles: BTreeSet<Reference>,
}

impl_asset_type!(PowerBIDashboard, "PowerBIDashboard");

impl AssetBuilder<PowerBIDashboard> {
    /// Sets the dashboard link.
    pub fn web_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.specific(|d| d.web_url = Some(url))
    }
}

/// Searchable fields of BI assets.
pub mod fields {
    use crate::search::fields::{KeywordField, NumericField, RelationField};

    /// `workspaceQualifiedName`
    pub const WORKSPACE_QUALIFIED_NAME: KeywordField = KeywordField::new("workspaceQualifiedName");
    /// `tileCount`
    pub const TILE_COUNT: NumericField = NumericField::new("tileCount");
    /// `tiles`
    pub const TILES: RelationField = RelationField::new("tiles");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::asset::Asset;
    use crate::model::asset_type::AssetType;
    use crate::model::enums::CertificateStatus;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_read_crawled_dashboard() {
        let raw = json!({
            "typeName": "PowerBIDashboard",
            "guid": "d1",
            "attributes": {
                "qualifiedName": "default/powerbi/1/workspaces/w1/dashboards/d1",
                "name": "Sales",
                "webUrl": "https://app.powerbi.com/d1",
                "tileCount": 7,
                "workspaceQualifiedName": "default/powerbi/1/workspaces/w1"
            },
            "relationshipAttributes": {
                "workspace": {"typeName": "PowerBIWorkspace", "guid": "w1"},
                "tiles": [{"typeName": "PowerBITile", "guid": "t1"}]
            }
        });
        let asset: Asset = serde_json::from_value(raw).unwrap();
        let dash = asset.typed::<PowerBIDashboard>().unwrap();
        assert_eq!(dash.tile_count, Some(7));
        assert_eq!(dash.workspace.as_ref().unwrap().guid.as_deref(), Some("w1"));
        assert_eq!(dash.tiles.len(), 1);
    }

    #[test]
    fn test_curate_dashboard() {
        let asset = PowerBIDashboard::updater("default/powerbi/1/workspaces/w1/dashboards/d1", "Sales")
            .certificate(CertificateStatus::Draft, None)
            .web_url("https://app.powerbi.com/d1")
            .build()
            .unwrap();
        let written = serde_json::to_value(&asset).unwrap();
        assert_eq!(written["typeName"], json!("PowerBIDashboard"));
        assert_eq!(written["attributes"]["certificateStatus"], json!("DRAFT"));
        assert_eq!(written["attributes"]["webUrl"], json!("https://app.powerbi.com/d1"));
        assert!(written.get("guid").is_none());
    }
}
