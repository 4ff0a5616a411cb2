#![deny(missing_docs)]

//! # Asset Envelope
//!
//! `Asset` holds what every catalog entity shares (identity, audit fields,
//! common attributes, tags and term assignments) plus an `AssetDetails`
//! variant with the type-specific attributes.
//!
//! On the wire an entity carries all of its attributes in a single
//! `attributes` bag; relationship attributes returned by `GET` calls arrive
//! in a separate `relationshipAttributes` bag and are merged over it when
//! reading.

use crate::error::{AtlanError, AtlanResult, ErrorCode};
use crate::model::asset_type::AssetType;
use crate::model::assets::{
    AirflowDag, AirflowTask, ApiPath, ApiSpec, PowerBIDashboard, SapErpView, Table,
};
use crate::model::enums::{AnnouncementType, CertificateStatus, ConnectorType, EntityStatus};
use crate::model::null_as_default;
use crate::model::reference::{AtlanTag, Reference};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

/// Type name of glossary terms.
pub const GLOSSARY_TERM_TYPE: &str = "AtlasGlossaryTerm";

/// Attribute carrying term assignments.
pub(crate) const MEANINGS: &str = "meanings";

static NEXT_PLACEHOLDER: AtomicU64 = AtomicU64::new(1);

/// Returns a fresh negative placeholder GUID for an asset not yet created.
pub fn placeholder_guid() -> String {
    format!("-{}", NEXT_PLACEHOLDER.fetch_add(1, Ordering::Relaxed))
}

/// Attributes shared by every asset type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetAttributes {
    /// Unique name of the asset within its type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    /// Simple name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name shown in the UI, when different from `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Description crawled from the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Description written by a user in the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_description: Option<String>,
    /// Individual owners.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub owner_users: BTreeSet<String>,
    /// Owning groups.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub owner_groups: BTreeSet<String>,
    /// Certification state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_status: Option<CertificateStatus>,
    /// Note explaining the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_status_message: Option<String>,
    /// Who last changed the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_updated_by: Option<String>,
    /// When the certificate last changed (epoch ms).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_updated_at: Option<i64>,
    /// Kind of announcement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement_type: Option<AnnouncementType>,
    /// Announcement heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement_title: Option<String>,
    /// Announcement body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement_message: Option<String>,
    /// Who last changed the announcement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement_updated_by: Option<String>,
    /// When the announcement last changed (epoch ms).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement_updated_at: Option<i64>,
    /// Source system the asset comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_name: Option<ConnectorType>,
    /// Qualified name of the connection the asset belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_qualified_name: Option<String>,
    /// Link to the asset in its source system.
    #[serde(rename = "sourceURL", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Whether lineage exists for the asset (read-only).
    #[serde(rename = "__hasLineage", skip_serializing_if = "Option::is_none")]
    pub has_lineage: Option<bool>,
    /// Processes that consume this asset.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub input_to_processes: BTreeSet<Reference>,
    /// Processes that produce this asset.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub output_from_processes: BTreeSet<Reference>,
}

impl AssetAttributes {
    /// Wire names of every common attribute.
    pub const NAMES: &'static [&'static str] = &[
        "qualifiedName",
        "name",
        "displayName",
        "description",
        "userDescription",
        "ownerUsers",
        "ownerGroups",
        "certificateStatus",
        "certificateStatusMessage",
        "certificateUpdatedBy",
        "certificateUpdatedAt",
        "announcementType",
        "announcementTitle",
        "announcementMessage",
        "announcementUpdatedBy",
        "announcementUpdatedAt",
        "connectorName",
        "connectionQualifiedName",
        "sourceURL",
        "__hasLineage",
        "inputToProcesses",
        "outputFromProcesses",
    ];
}

/// Type-specific attributes of an asset.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetDetails {
    /// An API specification.
    ApiSpec(ApiSpec),
    /// A path within an API specification.
    ApiPath(ApiPath),
    /// An Airflow DAG.
    AirflowDag(AirflowDag),
    /// A task within an Airflow DAG.
    AirflowTask(AirflowTask),
    /// A Power BI dashboard.
    PowerBIDashboard(PowerBIDashboard),
    /// An SAP ERP view.
    SapErpView(SapErpView),
    /// A relational table.
    Table(Table),
    /// Any type without a dedicated struct; attributes are kept verbatim.
    Other {
        /// Type name as sent by the API.
        type_name: String,
        /// Attributes not covered by `AssetAttributes`.
        attributes: IndexMap<String, Value>,
    },
}

impl AssetDetails {
    /// Type name of the asset.
    pub fn type_name(&self) -> &str {
        match self {
            AssetDetails::ApiSpec(_) => ApiSpec::TYPE_NAME,
            AssetDetails::ApiPath(_) => ApiPath::TYPE_NAME,
            AssetDetails::AirflowDag(_) => AirflowDag::TYPE_NAME,
            AssetDetails::AirflowTask(_) => AirflowTask::TYPE_NAME,
            AssetDetails::PowerBIDashboard(_) => PowerBIDashboard::TYPE_NAME,
            AssetDetails::SapErpView(_) => SapErpView::TYPE_NAME,
            AssetDetails::Table(_) => Table::TYPE_NAME,
            AssetDetails::Other { type_name, .. } => type_name,
        }
    }

    /// Empty details for the given type.
    pub fn empty_for(type_name: &str) -> Self {
        match type_name {
            ApiSpec::TYPE_NAME => ApiSpec::default().into(),
            ApiPath::TYPE_NAME => ApiPath::default().into(),
            AirflowDag::TYPE_NAME => AirflowDag::default().into(),
            AirflowTask::TYPE_NAME => AirflowTask::default().into(),
            PowerBIDashboard::TYPE_NAME => PowerBIDashboard::default().into(),
            SapErpView::TYPE_NAME => SapErpView::default().into(),
            Table::TYPE_NAME => Table::default().into(),
            other => AssetDetails::Other {
                type_name: other.to_string(),
                attributes: IndexMap::new(),
            },
        }
    }

    /// Parses the type-specific part of an attribute bag.
    fn from_attributes(type_name: &str, attributes: Map<String, Value>) -> AtlanResult<Self> {
        let bag = Value::Object(attributes);
        let details = match type_name {
            ApiSpec::TYPE_NAME => AssetDetails::ApiSpec(serde_json::from_value(bag)?),
            ApiPath::TYPE_NAME => AssetDetails::ApiPath(serde_json::from_value(bag)?),
            AirflowDag::TYPE_NAME => AssetDetails::AirflowDag(serde_json::from_value(bag)?),
            AirflowTask::TYPE_NAME => AssetDetails::AirflowTask(serde_json::from_value(bag)?),
            PowerBIDashboard::TYPE_NAME => {
                AssetDetails::PowerBIDashboard(serde_json::from_value(bag)?)
            }
            SapErpView::TYPE_NAME => AssetDetails::SapErpView(serde_json::from_value(bag)?),
            Table::TYPE_NAME => AssetDetails::Table(serde_json::from_value(bag)?),
            other => {
                let attributes = match bag {
                    Value::Object(map) => map
                        .into_iter()
                        .filter(|(k, v)| {
                            !v.is_null() && !AssetAttributes::NAMES.contains(&k.as_str())
                        })
                        .collect(),
                    _ => IndexMap::new(),
                };
                AssetDetails::Other {
                    type_name: other.to_string(),
                    attributes,
                }
            }
        };
        Ok(details)
    }

    /// Writes the type-specific attributes into an attribute bag.
    fn write_attributes(&self, out: &mut Map<String, Value>) -> AtlanResult<()> {
        let value = match self {
            AssetDetails::ApiSpec(d) => serde_json::to_value(d)?,
            AssetDetails::ApiPath(d) => serde_json::to_value(d)?,
            AssetDetails::AirflowDag(d) => serde_json::to_value(d)?,
            AssetDetails::AirflowTask(d) => serde_json::to_value(d)?,
            AssetDetails::PowerBIDashboard(d) => serde_json::to_value(d)?,
            AssetDetails::SapErpView(d) => serde_json::to_value(d)?,
            AssetDetails::Table(d) => serde_json::to_value(d)?,
            AssetDetails::Other { attributes, .. } => {
                for (k, v) in attributes {
                    out.insert(k.clone(), v.clone());
                }
                return Ok(());
            }
        };
        if let Value::Object(map) = value {
            out.extend(map);
        }
        Ok(())
    }
}

/// A catalog entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// GUID; negative placeholders mark assets not yet created.
    pub guid: Option<String>,
    /// Lifecycle state.
    pub status: Option<EntityStatus>,
    /// Creator (read-only).
    pub created_by: Option<String>,
    /// Last updater (read-only).
    pub updated_by: Option<String>,
    /// Creation time, epoch ms (read-only).
    pub create_time: Option<i64>,
    /// Last update time, epoch ms (read-only).
    pub update_time: Option<i64>,
    /// Attributes shared by all types.
    pub attributes: AssetAttributes,
    /// Type-specific attributes.
    pub details: AssetDetails,
    /// Tags attached to the asset.
    pub atlan_tags: Vec<AtlanTag>,
    /// Glossary terms assigned to the asset.
    pub assigned_terms: BTreeSet<Reference>,
    /// Attributes to clear on the next save.
    pub null_fields: BTreeSet<String>,
}

impl Asset {
    /// An empty asset around the given details.
    pub fn new(details: AssetDetails) -> Self {
        Self {
            guid: None,
            status: None,
            created_by: None,
            updated_by: None,
            create_time: None,
            update_time: None,
            attributes: AssetAttributes::default(),
            details,
            atlan_tags: Vec::new(),
            assigned_terms: BTreeSet::new(),
            null_fields: BTreeSet::new(),
        }
    }

    /// The smallest asset the API accepts for an update: type and qualified name.
    pub fn minimal(type_name: &str, qualified_name: &str) -> Self {
        let mut asset = Self::new(AssetDetails::empty_for(type_name));
        asset.attributes.qualified_name = Some(qualified_name.to_string());
        asset
    }

    /// Type name.
    pub fn type_name(&self) -> &str {
        self.details.type_name()
    }

    /// Qualified name, if set.
    pub fn qualified_name(&self) -> Option<&str> {
        self.attributes.qualified_name.as_deref()
    }

    /// Name, if set.
    pub fn name(&self) -> Option<&str> {
        self.attributes.name.as_deref()
    }

    /// GUID, if set.
    pub fn guid(&self) -> Option<&str> {
        self.guid.as_deref()
    }

    /// True for assets carrying a placeholder GUID.
    pub fn is_new(&self) -> bool {
        self.guid.as_deref().is_some_and(|g| g.starts_with('-'))
    }

    /// Type-specific attributes, when the asset is of type `T`.
    pub fn typed<T: AssetType>(&self) -> Option<&T> {
        T::from_details(&self.details)
    }

    /// Mutable type-specific attributes, when the asset is of type `T`.
    pub fn typed_mut<T: AssetType>(&mut self) -> Option<&mut T> {
        T::from_details_mut(&mut self.details)
    }

    /// Names of the tags attached to the asset.
    pub fn atlan_tag_names(&self) -> Vec<&str> {
        self.atlan_tags
            .iter()
            .map(|t| t.type_name.as_str())
            .collect()
    }

    /// Reference to this asset, by GUID when it has a real one, otherwise by
    /// qualified name.
    pub fn to_reference(&self) -> Option<Reference> {
        match (&self.guid, self.qualified_name()) {
            (Some(guid), _) if !self.is_new() => Some(Reference::by_guid(self.type_name(), guid)),
            (_, Some(qn)) => Some(Reference::by_qualified_name(self.type_name(), qn)),
            _ => None,
        }
    }

    /// Copy with only the fields required for an update (type, qualified name, name).
    pub fn trim_to_required(&self) -> AtlanResult<Asset> {
        let qualified_name = self.qualified_name().ok_or_else(|| {
            ErrorCode::MissingRequiredUpdateParam.error(&[self.type_name(), "qualifiedName"])
        })?;
        let name = self.name().ok_or_else(|| {
            ErrorCode::MissingRequiredUpdateParam.error(&[self.type_name(), "name"])
        })?;
        let mut trimmed = Asset::minimal(self.type_name(), qualified_name);
        trimmed.attributes.name = Some(name.to_string());
        Ok(trimmed)
    }
}

/// Read-only term assignment header returned at the top level of an entity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TermHeader {
    term_guid: Option<String>,
    display_text: Option<String>,
}

/// Entity as exchanged with the API.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetWire {
    type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<EntityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    create_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    update_time: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    attributes: Map<String, Value>,
    #[serde(
        default,
        skip_serializing_if = "Map::is_empty",
        deserialize_with = "null_as_default"
    )]
    relationship_attributes: Map<String, Value>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    classifications: Vec<AtlanTag>,
    #[serde(default, skip_serializing, deserialize_with = "null_as_default")]
    meanings: Vec<TermHeader>,
}

impl TryFrom<AssetWire> for Asset {
    type Error = AtlanError;

    fn try_from(wire: AssetWire) -> AtlanResult<Self> {
        let mut attributes = wire.attributes;
        for (key, value) in wire.relationship_attributes {
            if !value.is_null() {
                attributes.insert(key, value);
            }
        }

        let assigned_terms = match attributes.remove(MEANINGS) {
            Some(value) if !value.is_null() => serde_json::from_value(value)?,
            _ => wire
                .meanings
                .into_iter()
                .filter_map(|header| {
                    let guid = header.term_guid?;
                    let mut reference = Reference::by_guid(GLOSSARY_TERM_TYPE, guid);
                    reference.display_text = header.display_text;
                    Some(reference)
                })
                .collect(),
        };

        let common: AssetAttributes = serde_json::from_value(Value::Object(attributes.clone()))?;
        let details = AssetDetails::from_attributes(&wire.type_name, attributes)?;

        Ok(Asset {
            guid: wire.guid,
            status: wire.status,
            created_by: wire.created_by,
            updated_by: wire.updated_by,
            create_time: wire.create_time,
            update_time: wire.update_time,
            attributes: common,
            details,
            atlan_tags: wire.classifications,
            assigned_terms,
            null_fields: BTreeSet::new(),
        })
    }
}

impl TryFrom<&Asset> for AssetWire {
    type Error = AtlanError;

    fn try_from(asset: &Asset) -> AtlanResult<Self> {
        let mut attributes = match serde_json::to_value(&asset.attributes)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        asset.details.write_attributes(&mut attributes)?;

        let mut relationship_attributes = Map::new();
        if !asset.assigned_terms.is_empty() {
            let refs: Vec<Reference> = asset
                .assigned_terms
                .iter()
                .map(Reference::to_write_ref)
                .collect();
            relationship_attributes.insert(MEANINGS.to_string(), serde_json::to_value(refs)?);
        }

        for field in &asset.null_fields {
            if field == MEANINGS {
                relationship_attributes.insert(MEANINGS.to_string(), Value::Array(Vec::new()));
            } else {
                attributes.insert(field.clone(), Value::Null);
            }
        }

        Ok(AssetWire {
            type_name: asset.type_name().to_string(),
            guid: asset.guid.clone(),
            status: asset.status,
            created_by: asset.created_by.clone(),
            updated_by: asset.updated_by.clone(),
            create_time: asset.create_time,
            update_time: asset.update_time,
            attributes,
            relationship_attributes,
            classifications: asset.atlan_tags.clone(),
            meanings: Vec::new(),
        })
    }
}

impl Serialize for Asset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = AssetWire::try_from(self).map_err(serde::ser::Error::custom)?;
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Asset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = AssetWire::deserialize(deserializer)?;
        Asset::try_from(wire).map_err(serde::de::Error::custom)
    }
}
