#![deny(missing_docs)]

//! # Asset Operations
//!
//! The base operations every typed helper delegates to. Attribute helpers
//! send the smallest update the API accepts: an asset carrying only its
//! type, qualified name (and name, where the API requires it), plus the
//! attributes being changed or cleared.

use crate::client::{endpoints, AtlanClient};
use crate::error::{AtlanError, AtlanResult, ErrorCode};
use crate::model::asset::{Asset, MEANINGS};
use crate::model::enums::{AnnouncementType, CertificateStatus, DeleteType, EntityStatus};
use crate::model::mutation::MutationResponse;
use crate::model::reference::{AtlanTag, Reference};
use crate::search::request::IndexSearchRequest;
use crate::search::response::IndexSearchResponse;
use serde::Deserialize;
use std::collections::BTreeSet;

/// How much of an asset to retrieve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// Return only minimal information about related entities.
    pub min_ext_info: bool,
    /// Leave relationships out entirely.
    pub ignore_relationships: bool,
}

impl GetOptions {
    /// Only the asset's own attributes.
    pub fn minimal() -> Self {
        Self {
            min_ext_info: true,
            ignore_relationships: true,
        }
    }

    /// Relationships included, with minimal information about each.
    pub fn with_relationships() -> Self {
        Self {
            min_ext_info: true,
            ignore_relationships: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EntityEnvelope {
    entity: Asset,
}

/// Term assignments still in force; removed relationships linger with a `DELETED` status.
fn current_terms(asset: &Asset) -> impl Iterator<Item = &Reference> {
    asset
        .assigned_terms
        .iter()
        .filter(|term| term.relationship_status != Some(EntityStatus::Deleted))
}

/// Base operations on assets, bound to a client.
#[derive(Debug, Clone, Copy)]
pub struct AssetClient<'c> {
    client: &'c AtlanClient,
}

impl<'c> AssetClient<'c> {
    pub(crate) fn new(client: &'c AtlanClient) -> Self {
        Self { client }
    }

    /// Retrieves an asset by GUID.
    pub fn get_by_guid(&self, guid: &str, options: GetOptions) -> AtlanResult<Asset> {
        let request =
            endpoints::get_entity_by_guid(guid, options.min_ext_info, options.ignore_relationships);
        self.client
            .call::<EntityEnvelope>(&request)
            .map(|envelope| envelope.entity)
            .map_err(|e| match e {
                AtlanError::NotFound(_) => ErrorCode::AssetNotFoundByGuid.error(&[guid]),
                other => other,
            })
    }

    /// Retrieves an asset by GUID, failing with not-found when it is of
    /// another type.
    pub fn get_by_guid_as(
        &self,
        guid: &str,
        type_name: &str,
        options: GetOptions,
    ) -> AtlanResult<Asset> {
        let asset = self.get_by_guid(guid, options)?;
        if asset.type_name() != type_name {
            return Err(ErrorCode::AssetNotTypeRequested.error(&[guid, type_name]));
        }
        Ok(asset)
    }

    /// Retrieves an asset by type and qualified name.
    pub fn get_by_qualified_name(
        &self,
        type_name: &str,
        qualified_name: &str,
        options: GetOptions,
    ) -> AtlanResult<Asset> {
        let request = endpoints::get_entity_by_qualified_name(
            type_name,
            qualified_name,
            options.min_ext_info,
            options.ignore_relationships,
        );
        self.client
            .call::<EntityEnvelope>(&request)
            .map(|envelope| envelope.entity)
            .map_err(|e| match e {
                AtlanError::NotFound(_) => {
                    ErrorCode::AssetNotFoundByQualifiedName.error(&[qualified_name, type_name])
                }
                other => other,
            })
    }

    /// Creates or updates assets.
    ///
    /// With `replace_tags`, the tags on each asset replace those already
    /// attached; otherwise tags are left untouched.
    pub fn save(&self, assets: &[Asset], replace_tags: bool) -> AtlanResult<MutationResponse> {
        if assets.is_empty() {
            return Ok(MutationResponse::default());
        }
        if let Some(incomplete) = assets.iter().find(|a| a.qualified_name().is_none()) {
            return Err(ErrorCode::MissingRequiredUpdateParam
                .error(&[incomplete.type_name(), "qualifiedName"]));
        }
        log::debug!("Saving {} asset(s)", assets.len());
        let request = endpoints::save_entities(serde_json::to_value(assets)?, replace_tags);
        self.client.call(&request)
    }

    fn save_one(&self, asset: Asset) -> AtlanResult<Option<Asset>> {
        let response = self.save(std::slice::from_ref(&asset), false)?;
        Ok(response.first_updated().cloned())
    }

    fn delete_as(&self, guids: &[&str], delete_type: DeleteType) -> AtlanResult<MutationResponse> {
        if guids.is_empty() {
            return Err(ErrorCode::MissingRequiredQueryParam.error(&["delete", "guid"]));
        }
        log::debug!("Deleting {} asset(s) ({})", guids.len(), delete_type.as_str());
        self.client
            .call(&endpoints::delete_entities(guids, delete_type))
    }

    /// Archives (soft-deletes) assets.
    pub fn delete(&self, guids: &[&str]) -> AtlanResult<MutationResponse> {
        self.delete_as(guids, DeleteType::Soft)
    }

    /// Permanently removes assets.
    pub fn purge(&self, guids: &[&str]) -> AtlanResult<MutationResponse> {
        self.delete_as(guids, DeleteType::Purge)
    }

    /// Restores archived assets.
    pub fn restore(&self, guids: &[&str]) -> AtlanResult<MutationResponse> {
        if guids.is_empty() {
            return Err(ErrorCode::MissingRequiredQueryParam.error(&["restore", "guid"]));
        }
        self.client.call(&endpoints::restore_entities(guids))
    }

    /// Restores an archived asset by qualified name; `false` when it is already active.
    pub fn restore_by_qualified_name(
        &self,
        type_name: &str,
        qualified_name: &str,
    ) -> AtlanResult<bool> {
        let existing =
            self.get_by_qualified_name(type_name, qualified_name, GetOptions::minimal())?;
        if existing.status != Some(EntityStatus::Deleted) {
            return Ok(false);
        }
        let guid = existing.guid().ok_or_else(|| {
            ErrorCode::UnexpectedResponse.error(&[&format!("{} has no GUID", qualified_name)])
        })?;
        self.restore(&[guid])?;
        Ok(true)
    }

    /// Runs an index search.
    pub fn search(&self, request: &IndexSearchRequest) -> AtlanResult<IndexSearchResponse> {
        let body = serde_json::to_value(request)?;
        self.client.call(&endpoints::index_search(body))
    }

    /// Attaches tags to an asset.
    pub fn add_atlan_tags(
        &self,
        type_name: &str,
        qualified_name: &str,
        tags: &[AtlanTag],
    ) -> AtlanResult<()> {
        let body = serde_json::to_value(tags)?;
        self.client
            .call_empty(&endpoints::add_classifications(type_name, qualified_name, body))
    }

    /// Detaches a tag from an asset.
    pub fn remove_atlan_tag(
        &self,
        type_name: &str,
        qualified_name: &str,
        tag: &str,
    ) -> AtlanResult<()> {
        self.client
            .call_empty(&endpoints::remove_classification(type_name, qualified_name, tag))
    }

    fn named(type_name: &str, qualified_name: &str, name: &str) -> Asset {
        let mut asset = Asset::minimal(type_name, qualified_name);
        asset.attributes.name = Some(name.to_string());
        asset
    }

    fn clearing(type_name: &str, qualified_name: &str, name: &str, fields: &[&str]) -> Asset {
        let mut asset = Self::named(type_name, qualified_name, name);
        asset
            .null_fields
            .extend(fields.iter().map(|f| f.to_string()));
        asset
    }

    /// Sets the certificate of an asset.
    pub fn update_certificate(
        &self,
        type_name: &str,
        qualified_name: &str,
        status: CertificateStatus,
        message: Option<&str>,
    ) -> AtlanResult<Option<Asset>> {
        let mut asset = Asset::minimal(type_name, qualified_name);
        asset.attributes.certificate_status = Some(status);
        asset.attributes.certificate_status_message = message.map(str::to_string);
        self.save_one(asset)
    }

    /// Clears the certificate of an asset.
    pub fn remove_certificate(
        &self,
        type_name: &str,
        qualified_name: &str,
        name: &str,
    ) -> AtlanResult<Option<Asset>> {
        self.save_one(Self::clearing(
            type_name,
            qualified_name,
            name,
            &["certificateStatus", "certificateStatusMessage"],
        ))
    }

    /// Sets the announcement of an asset.
    pub fn update_announcement(
        &self,
        type_name: &str,
        qualified_name: &str,
        kind: AnnouncementType,
        title: &str,
        message: Option<&str>,
    ) -> AtlanResult<Option<Asset>> {
        let mut asset = Asset::minimal(type_name, qualified_name);
        asset.attributes.announcement_type = Some(kind);
        asset.attributes.announcement_title = Some(title.to_string());
        asset.attributes.announcement_message = message.map(str::to_string);
        self.save_one(asset)
    }

    /// Clears the announcement of an asset.
    pub fn remove_announcement(
        &self,
        type_name: &str,
        qualified_name: &str,
        name: &str,
    ) -> AtlanResult<Option<Asset>> {
        self.save_one(Self::clearing(
            type_name,
            qualified_name,
            name,
            &["announcementType", "announcementTitle", "announcementMessage"],
        ))
    }

    /// Sets the crawled description of an asset.
    pub fn update_description(
        &self,
        type_name: &str,
        qualified_name: &str,
        name: &str,
        description: &str,
    ) -> AtlanResult<Option<Asset>> {
        let mut asset = Self::named(type_name, qualified_name, name);
        asset.attributes.description = Some(description.to_string());
        self.save_one(asset)
    }

    /// Clears the crawled description of an asset.
    pub fn remove_description(
        &self,
        type_name: &str,
        qualified_name: &str,
        name: &str,
    ) -> AtlanResult<Option<Asset>> {
        self.save_one(Self::clearing(
            type_name,
            qualified_name,
            name,
            &["description"],
        ))
    }

    /// Clears the user-written description of an asset.
    pub fn remove_user_description(
        &self,
        type_name: &str,
        qualified_name: &str,
        name: &str,
    ) -> AtlanResult<Option<Asset>> {
        self.save_one(Self::clearing(
            type_name,
            qualified_name,
            name,
            &["userDescription"],
        ))
    }

    /// Replaces the owners of an asset.
    pub fn update_owners(
        &self,
        type_name: &str,
        qualified_name: &str,
        name: &str,
        users: &[&str],
        groups: &[&str],
    ) -> AtlanResult<Option<Asset>> {
        let mut asset = Self::named(type_name, qualified_name, name);
        asset.attributes.owner_users = users.iter().map(|u| u.to_string()).collect();
        asset.attributes.owner_groups = groups.iter().map(|g| g.to_string()).collect();
        if users.is_empty() {
            asset.null_fields.insert("ownerUsers".to_string());
        }
        if groups.is_empty() {
            asset.null_fields.insert("ownerGroups".to_string());
        }
        self.save_one(asset)
    }

    /// Clears the owners (users and groups) of an asset.
    pub fn remove_owners(
        &self,
        type_name: &str,
        qualified_name: &str,
        name: &str,
    ) -> AtlanResult<Option<Asset>> {
        self.save_one(Self::clearing(
            type_name,
            qualified_name,
            name,
            &["ownerUsers", "ownerGroups"],
        ))
    }

    /// Adds terms to those already assigned to an asset.
    pub fn append_terms(
        &self,
        type_name: &str,
        qualified_name: &str,
        terms: &[Reference],
    ) -> AtlanResult<Option<Asset>> {
        let existing = self.get_by_qualified_name(
            type_name,
            qualified_name,
            GetOptions::with_relationships(),
        )?;
        if terms.is_empty() {
            return Ok(Some(existing));
        }
        let mut asset = existing.trim_to_required()?;
        asset.assigned_terms = current_terms(&existing)
            .chain(terms)
            .map(Reference::to_write_ref)
            .collect();
        self.save_one(asset)
    }

    /// Replaces the terms assigned to an asset; an empty slice clears them.
    pub fn replace_terms(
        &self,
        type_name: &str,
        qualified_name: &str,
        name: &str,
        terms: &[Reference],
    ) -> AtlanResult<Option<Asset>> {
        let mut asset = Self::named(type_name, qualified_name, name);
        if terms.is_empty() {
            asset.null_fields.insert(MEANINGS.to_string());
        } else {
            asset.assigned_terms = terms.iter().map(Reference::to_write_ref).collect();
        }
        self.save_one(asset)
    }

    /// Removes terms from an asset, leaving the others assigned.
    pub fn remove_terms(
        &self,
        type_name: &str,
        qualified_name: &str,
        terms: &[Reference],
    ) -> AtlanResult<Option<Asset>> {
        let existing = self.get_by_qualified_name(
            type_name,
            qualified_name,
            GetOptions::with_relationships(),
        )?;
        let remaining: BTreeSet<Reference> = current_terms(&existing)
            .filter(|assigned| !terms.iter().any(|t| t.same_target(assigned)))
            .map(Reference::to_write_ref)
            .collect();

        let mut asset = existing.trim_to_required()?;
        if remaining.is_empty() {
            asset.null_fields.insert(MEANINGS.to_string());
        } else {
            asset.assigned_terms = remaining;
        }
        self.save_one(asset)
    }
}
