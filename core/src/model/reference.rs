#![deny(missing_docs)]

//! # References
//!
//! Lightweight stubs pointing at other entities, used to link assets
//! without fetching them, and the tag assignments carried by an asset.

use crate::model::enums::EntityStatus;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Unique attributes identifying an entity within its type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueAttributes {
    /// Qualified name of the entity.
    pub qualified_name: String,
}

/// A pointer to another entity, by GUID or by qualified name.
///
/// Equality, ordering and hashing only consider the identity of the target
/// (type, GUID, qualified name); read-only relationship metadata returned by
/// the API is ignored, so sets of references de-duplicate by target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Type of the referenced entity.
    pub type_name: String,
    /// GUID of the referenced entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    /// Unique attributes of the referenced entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_attributes: Option<UniqueAttributes>,
    /// Name of the referenced entity, as returned by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
    /// Status of the referenced entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<EntityStatus>,
    /// GUID of the relationship itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_guid: Option<String>,
    /// Status of the relationship itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_status: Option<EntityStatus>,
}

impl Reference {
    /// Reference to an entity by its GUID.
    pub fn by_guid(type_name: impl Into<String>, guid: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            guid: Some(guid.into()),
            ..Default::default()
        }
    }

    /// Reference to an entity by its qualified name.
    pub fn by_qualified_name(
        type_name: impl Into<String>,
        qualified_name: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            unique_attributes: Some(UniqueAttributes {
                qualified_name: qualified_name.into(),
            }),
            ..Default::default()
        }
    }

    /// Qualified name of the target, if known.
    pub fn qualified_name(&self) -> Option<&str> {
        self.unique_attributes
            .as_ref()
            .map(|u| u.qualified_name.as_str())
    }

    /// True when both references point at the same entity, either by GUID or
    /// by qualified name.
    pub fn same_target(&self, other: &Reference) -> bool {
        match (&self.guid, &other.guid) {
            (Some(a), Some(b)) if a == b => return true,
            _ => {}
        }
        match (self.qualified_name(), other.qualified_name()) {
            (Some(a), Some(b)) => a == b && self.type_name == other.type_name,
            _ => false,
        }
    }

    /// Copy stripped down to what a write request needs.
    pub fn to_write_ref(&self) -> Reference {
        Reference {
            type_name: self.type_name.clone(),
            guid: self.guid.clone(),
            unique_attributes: if self.guid.is_some() {
                None
            } else {
                self.unique_attributes.clone()
            },
            ..Default::default()
        }
    }

    fn identity(&self) -> (&str, Option<&str>, Option<&str>) {
        (
            self.type_name.as_str(),
            self.guid.as_deref(),
            self.qualified_name(),
        )
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Reference {}

impl PartialOrd for Reference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl Hash for Reference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

/// A tag (classification) assigned to an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlanTag {
    /// Name of the tag.
    pub type_name: String,
    /// GUID of the asset the tag is attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_guid: Option<String>,
    /// Status of the asset the tag is attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<EntityStatus>,
    /// Whether the tag propagates to downstream assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagate: Option<bool>,
    /// Whether propagated copies go away when this asset is deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_propagations_on_entity_delete: Option<bool>,
    /// Whether propagation stops at lineage boundaries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict_propagation_through_lineage: Option<bool>,
    /// Whether propagation stops at parent/child boundaries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict_propagation_through_hierarchy: Option<bool>,
}

impl AtlanTag {
    /// A tag that stays on the asset it is attached to.
    pub fn of(name: impl Into<String>) -> Self {
        Self {
            type_name: name.into(),
            entity_guid: None,
            entity_status: None,
            propagate: Some(false),
            remove_propagations_on_entity_delete: None,
            restrict_propagation_through_lineage: None,
            restrict_propagation_through_hierarchy: None,
        }
    }

    /// A propagating tag.
    pub fn propagated(
        name: impl Into<String>,
        remove_on_delete: bool,
        restrict_lineage: bool,
    ) -> Self {
        Self {
            propagate: Some(true),
            remove_propagations_on_entity_delete: Some(remove_on_delete),
            restrict_propagation_through_lineage: Some(restrict_lineage),
            ..Self::of(name)
        }
    }
}
