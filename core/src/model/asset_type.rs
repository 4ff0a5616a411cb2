#![deny(missing_docs)]

//! # Asset Type Capability
//!
//! `AssetType` is implemented by every typed attribute struct. Besides
//! linking the struct to its `AssetDetails` variant, it provides the static
//! helpers of a typed asset; each forwards to the matching base operation of
//! `AssetClient` with the type name filled in.

use crate::client::assets::GetOptions;
use crate::client::AtlanClient;
use crate::error::AtlanResult;
use crate::model::asset::{Asset, AssetDetails};
use crate::model::builder::AssetBuilder;
use crate::model::enums::{AnnouncementType, CertificateStatus};
use crate::model::mutation::MutationResponse;
use crate::model::reference::{AtlanTag, Reference};
use crate::search::FluentSearch;

/// A typed asset.
pub trait AssetType: Default + Into<AssetDetails> + Sized {
    /// Type name used by the API.
    const TYPE_NAME: &'static str;

    /// Borrows the typed attributes out of the details, if they match.
    fn from_details(details: &AssetDetails) -> Option<&Self>;

    /// Mutably borrows the typed attributes out of the details, if they match.
    fn from_details_mut(details: &mut AssetDetails) -> Option<&mut Self>;

    /// Builder for modifying an existing asset of this type.
    fn updater(qualified_name: &str, name: &str) -> AssetBuilder<Self> {
        AssetBuilder::<Self>::new()
            .qualified_name(qualified_name)
            .name(name)
    }

    /// Reference to an asset of this type by GUID.
    fn ref_by_guid(guid: &str) -> Reference {
        Reference::by_guid(Self::TYPE_NAME, guid)
    }

    /// Reference to an asset of this type by qualified name.
    fn ref_by_qualified_name(qualified_name: &str) -> Reference {
        Reference::by_qualified_name(Self::TYPE_NAME, qualified_name)
    }

    /// Retrieves an asset by GUID, failing if it is of another type.
    fn get_by_guid(client: &AtlanClient, guid: &str) -> AtlanResult<Asset> {
        client
            .assets()
            .get_by_guid_as(guid, Self::TYPE_NAME, GetOptions::default())
    }

    /// Retrieves an asset of this type by qualified name.
    fn get_by_qualified_name(client: &AtlanClient, qualified_name: &str) -> AtlanResult<Asset> {
        client
            .assets()
            .get_by_qualified_name(Self::TYPE_NAME, qualified_name, GetOptions::default())
    }

    /// Starts a search over active assets of this type.
    fn select(client: &AtlanClient) -> FluentSearch<'_> {
        client.select().asset_type(Self::TYPE_NAME)
    }

    /// Archives (soft-deletes) the asset with the given GUID.
    fn delete(client: &AtlanClient, guid: &str) -> AtlanResult<MutationResponse> {
        client.assets().delete(&[guid])
    }

    /// Permanently removes the asset with the given GUID.
    fn purge(client: &AtlanClient, guid: &str) -> AtlanResult<MutationResponse> {
        client.assets().purge(&[guid])
    }

    /// Restores an archived asset of this type by qualified name.
    ///
    /// Returns `false` when the asset is already active.
    fn restore(client: &AtlanClient, qualified_name: &str) -> AtlanResult<bool> {
        client.assets().restore_by_qualified_name(Self::TYPE_NAME, qualified_name)
    }

    /// Sets the certificate of an asset.
    fn update_certificate(
        client: &AtlanClient,
        qualified_name: &str,
        status: CertificateStatus,
        message: Option<&str>,
    ) -> AtlanResult<Option<Asset>> {
        client
            .assets()
            .update_certificate(Self::TYPE_NAME, qualified_name, status, message)
    }

    /// Clears the certificate of an asset.
    fn remove_certificate(
        client: &AtlanClient,
        qualified_name: &str,
        name: &str,
    ) -> AtlanResult<Option<Asset>> {
        client
            .assets()
            .remove_certificate(Self::TYPE_NAME, qualified_name, name)
    }

    /// Sets the announcement of an asset.
    fn update_announcement(
        client: &AtlanClient,
        qualified_name: &str,
        kind: AnnouncementType,
        title: &str,
        message: Option<&str>,
    ) -> AtlanResult<Option<Asset>> {
        client
            .assets()
            .update_announcement(Self::TYPE_NAME, qualified_name, kind, title, message)
    }

    /// Clears the announcement of an asset.
    fn remove_announcement(
        client: &AtlanClient,
        qualified_name: &str,
        name: &str,
    ) -> AtlanResult<Option<Asset>> {
        client
            .assets()
            .remove_announcement(Self::TYPE_NAME, qualified_name, name)
    }

    /// Clears the crawled description of an asset.
    fn remove_description(
        client: &AtlanClient,
        qualified_name: &str,
        name: &str,
    ) -> AtlanResult<Option<Asset>> {
        client
            .assets()
            .remove_description(Self::TYPE_NAME, qualified_name, name)
    }

    /// Clears the user-written description of an asset.
    fn remove_user_description(
        client: &AtlanClient,
        qualified_name: &str,
        name: &str,
    ) -> AtlanResult<Option<Asset>> {
        client
            .assets()
            .remove_user_description(Self::TYPE_NAME, qualified_name, name)
    }

    /// Clears the owners (users and groups) of an asset.
    fn remove_owners(
        client: &AtlanClient,
        qualified_name: &str,
        name: &str,
    ) -> AtlanResult<Option<Asset>> {
        client
            .assets()
            .remove_owners(Self::TYPE_NAME, qualified_name, name)
    }

    /// Attaches tags to an asset.
    fn append_atlan_tags(
        client: &AtlanClient,
        qualified_name: &str,
        tags: &[AtlanTag],
    ) -> AtlanResult<()> {
        client
            .assets()
            .add_atlan_tags(Self::TYPE_NAME, qualified_name, tags)
    }

    /// Detaches a tag from an asset.
    fn remove_atlan_tag(client: &AtlanClient, qualified_name: &str, tag: &str) -> AtlanResult<()> {
        client
            .assets()
            .remove_atlan_tag(Self::TYPE_NAME, qualified_name, tag)
    }

    /// Adds terms to those already assigned to an asset.
    fn append_terms(
        client: &AtlanClient,
        qualified_name: &str,
        terms: &[Reference],
    ) -> AtlanResult<Option<Asset>> {
        client
            .assets()
            .append_terms(Self::TYPE_NAME, qualified_name, terms)
    }

    /// Replaces the terms assigned to an asset; an empty list clears them.
    fn replace_terms(
        client: &AtlanClient,
        qualified_name: &str,
        name: &str,
        terms: &[Reference],
    ) -> AtlanResult<Option<Asset>> {
        client
            .assets()
            .replace_terms(Self::TYPE_NAME, qualified_name, name, terms)
    }

    /// Removes terms from an asset, leaving the others assigned.
    fn remove_terms(
        client: &AtlanClient,
        qualified_name: &str,
        terms: &[Reference],
    ) -> AtlanResult<Option<Asset>> {
        client
            .assets()
            .remove_terms(Self::TYPE_NAME, qualified_name, terms)
    }
}
