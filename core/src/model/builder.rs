#![deny(missing_docs)]

//! # Asset Builder
//!
//! Fluent construction of typed assets. Per-type setters live next to each
//! type in `model::assets`.

use crate::error::{AtlanResult, ErrorCode};
use crate::model::asset::{placeholder_guid, Asset, MEANINGS};
use crate::model::asset_type::AssetType;
use crate::model::enums::{AnnouncementType, CertificateStatus, ConnectorType, EntityStatus};
use crate::model::reference::{AtlanTag, Reference};
use std::marker::PhantomData;

/// Builds an `Asset` whose details are of type `T`.
#[derive(Debug, Clone)]
pub struct AssetBuilder<T: AssetType> {
    asset: Asset,
    _type: PhantomData<T>,
}

impl<T: AssetType> Default for AssetBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AssetType> AssetBuilder<T> {
    /// Starts from an empty asset of type `T`.
    pub fn new() -> Self {
        Self {
            asset: Asset::new(T::default().into()),
            _type: PhantomData,
        }
    }

    /// Starts from an existing asset, if it is of type `T`.
    pub fn from_asset(asset: Asset) -> Option<Self> {
        T::from_details(&asset.details)?;
        Some(Self {
            asset,
            _type: PhantomData,
        })
    }

    /// Starts a new asset carrying a placeholder GUID.
    pub(crate) fn for_creation() -> Self {
        Self::new().guid(placeholder_guid())
    }

    fn touch(&mut self, field: &str) {
        self.asset.null_fields.remove(field);
    }

    /// Sets the GUID.
    pub fn guid(mut self, guid: impl Into<String>) -> Self {
        self.asset.guid = Some(guid.into());
        self
    }

    /// Sets the lifecycle state.
    pub fn status(mut self, status: EntityStatus) -> Self {
        self.asset.status = Some(status);
        self
    }

    /// Sets the qualified name.
    pub fn qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        self.touch("qualifiedName");
        self.asset.attributes.qualified_name = Some(qualified_name.into());
        self
    }

    /// Sets the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.touch("name");
        self.asset.attributes.name = Some(name.into());
        self
    }

    /// Sets the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.touch("displayName");
        self.asset.attributes.display_name = Some(display_name.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.touch("description");
        self.asset.attributes.description = Some(description.into());
        self
    }

    /// Sets the user-written description.
    pub fn user_description(mut self, description: impl Into<String>) -> Self {
        self.touch("userDescription");
        self.asset.attributes.user_description = Some(description.into());
        self
    }

    /// Adds an owning user.
    pub fn owner_user(mut self, user: impl Into<String>) -> Self {
        self.touch("ownerUsers");
        self.asset.attributes.owner_users.insert(user.into());
        self
    }

    /// Adds several owning users.
    pub fn owner_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.touch("ownerUsers");
        self.asset
            .attributes
            .owner_users
            .extend(users.into_iter().map(Into::into));
        self
    }

    /// Adds an owning group.
    pub fn owner_group(mut self, group: impl Into<String>) -> Self {
        self.touch("ownerGroups");
        self.asset.attributes.owner_groups.insert(group.into());
        self
    }

    /// Adds several owning groups.
    pub fn owner_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.touch("ownerGroups");
        self.asset
            .attributes
            .owner_groups
            .extend(groups.into_iter().map(Into::into));
        self
    }

    /// Sets the certificate and its optional message.
    pub fn certificate(mut self, status: CertificateStatus, message: Option<&str>) -> Self {
        self.touch("certificateStatus");
        self.asset.attributes.certificate_status = Some(status);
        if let Some(message) = message {
            self.touch("certificateStatusMessage");
            self.asset.attributes.certificate_status_message = Some(message.to_string());
        }
        self
    }

    /// Sets the announcement.
    pub fn announcement(
        mut self,
        kind: AnnouncementType,
        title: impl Into<String>,
        message: Option<&str>,
    ) -> Self {
        self.touch("announcementType");
        self.touch("announcementTitle");
        self.asset.attributes.announcement_type = Some(kind);
        self.asset.attributes.announcement_title = Some(title.into());
        if let Some(message) = message {
            self.touch("announcementMessage");
            self.asset.attributes.announcement_message = Some(message.to_string());
        }
        self
    }

    /// Sets the connector.
    pub fn connector_name(mut self, connector: ConnectorType) -> Self {
        self.touch("connectorName");
        self.asset.attributes.connector_name = Some(connector);
        self
    }

    /// Sets the connection the asset belongs to.
    pub fn connection_qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        self.touch("connectionQualifiedName");
        self.asset.attributes.connection_qualified_name = Some(qualified_name.into());
        self
    }

    /// Sets the link to the asset in its source system.
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.touch("sourceURL");
        self.asset.attributes.source_url = Some(url.into());
        self
    }

    /// Attaches a tag.
    pub fn atlan_tag(mut self, tag: AtlanTag) -> Self {
        self.asset.atlan_tags.push(tag);
        self
    }

    /// Assigns a glossary term.
    pub fn assigned_term(mut self, term: Reference) -> Self {
        self.touch(MEANINGS);
        self.asset.assigned_terms.insert(term);
        self
    }

    /// Adds a process consuming this asset.
    pub fn input_to_process(mut self, process: Reference) -> Self {
        self.touch("inputToProcesses");
        self.asset.attributes.input_to_processes.insert(process);
        self
    }

    /// Adds a process producing this asset.
    pub fn output_from_process(mut self, process: Reference) -> Self {
        self.touch("outputFromProcesses");
        self.asset.attributes.output_from_processes.insert(process);
        self
    }

    /// Marks an attribute (by wire name) to be cleared on save.
    pub fn null_field(mut self, field: impl Into<String>) -> Self {
        self.asset.null_fields.insert(field.into());
        self
    }

    /// Clears the description.
    pub fn remove_description(mut self) -> Self {
        self.asset.attributes.description = None;
        self.null_field("description")
    }

    /// Clears the user-written description.
    pub fn remove_user_description(mut self) -> Self {
        self.asset.attributes.user_description = None;
        self.null_field("userDescription")
    }

    /// Clears owning users and groups.
    pub fn remove_owners(mut self) -> Self {
        self.asset.attributes.owner_users.clear();
        self.asset.attributes.owner_groups.clear();
        self.null_field("ownerUsers").null_field("ownerGroups")
    }

    /// Clears the certificate and its message.
    pub fn remove_certificate(mut self) -> Self {
        self.asset.attributes.certificate_status = None;
        self.asset.attributes.certificate_status_message = None;
        self.null_field("certificateStatus")
            .null_field("certificateStatusMessage")
    }

    /// Clears the announcement.
    pub fn remove_announcement(mut self) -> Self {
        self.asset.attributes.announcement_type = None;
        self.asset.attributes.announcement_title = None;
        self.asset.attributes.announcement_message = None;
        self.null_field("announcementType")
            .null_field("announcementTitle")
            .null_field("announcementMessage")
    }

    /// Removes every term assignment.
    pub fn remove_assigned_terms(mut self) -> Self {
        self.asset.assigned_terms.clear();
        self.null_field(MEANINGS)
    }

    /// Applies a change to the type-specific attributes.
    pub fn specific<F: FnOnce(&mut T)>(mut self, change: F) -> Self {
        if let Some(details) = T::from_details_mut(&mut self.asset.details) {
            change(details);
        }
        self
    }

    /// Read access to the asset being built.
    pub fn peek(&self) -> &Asset {
        &self.asset
    }

    /// Finishes the asset, checking the fields every save requires.
    pub fn build(self) -> AtlanResult<Asset> {
        let missing: Vec<&str> = [
            ("qualifiedName", self.asset.attributes.qualified_name.is_none()),
            ("name", self.asset.attributes.name.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ErrorCode::MissingRequiredUpdateParam
                .error(&[T::TYPE_NAME, &missing.join(", ")]));
        }
        Ok(self.asset)
    }
}

impl Asset {
    /// Builder seeded with this asset, if it is of type `T`.
    pub fn to_builder<T: AssetType>(&self) -> Option<AssetBuilder<T>> {
        AssetBuilder::from_asset(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::assets::{AirflowDag, Table};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_build_requires_identity() {
        let err = AssetBuilder::<Table>::new().description("x").build().unwrap_err();
        assert_eq!(err.code(), Some("ATLAN-RUST-400-001"));
        assert!(err
            .detail()
            .unwrap()
            .message
            .contains("qualifiedName, name"));
    }

    #[test]
    fn test_setting_a_field_cancels_its_removal() {
        let asset = Table::updater("default/postgres/1/db/s/t", "t")
            .remove_description()
            .description("restored")
            .build()
            .unwrap();
        assert!(asset.null_fields.is_empty());
        assert_eq!(asset.attributes.description.as_deref(), Some("restored"));
    }

    #[test]
    fn test_remove_certificate_writes_nulls() {
        let asset = AirflowDag::updater("default/airflow/1/etl", "etl")
            .remove_certificate()
            .build()
            .unwrap();
        let written = serde_json::to_value(&asset).unwrap();
        assert_eq!(
            written["attributes"],
            json!({
                "qualifiedName": "default/airflow/1/etl",
                "name": "etl",
                "certificateStatus": null,
                "certificateStatusMessage": null
            })
        );
    }

    #[test]
    fn test_round_trip_of_built_asset() {
        let asset = AirflowDag::updater("default/airflow/1/etl", "etl")
            .description("Nightly ETL")
            .owner_users(["jane", "ahmed"])
            .owner_group("data-eng")
            .certificate(CertificateStatus::Verified, Some("Reviewed"))
            .announcement(AnnouncementType::Warning, "Migrating", None)
            .atlan_tag(AtlanTag::of("Finance"))
            .assigned_term(Reference::by_guid("AtlasGlossaryTerm", "term-1"))
            .specific(|dag| dag.airflow_dag_schedule = Some("@daily".into()))
            .build()
            .unwrap();

        let text = serde_json::to_string(&asset).unwrap();
        let back: Asset = serde_json::from_str(&text).unwrap();
        assert_eq!(back, asset);
    }

    #[test]
    fn test_to_builder_checks_type() {
        let asset = Table::updater("default/postgres/1/db/s/t", "t")
            .build()
            .unwrap();
        assert!(asset.to_builder::<AirflowDag>().is_none());
        let rebuilt = asset
            .to_builder::<Table>()
            .unwrap()
            .user_description("Customer master")
            .build()
            .unwrap();
        assert_eq!(
            rebuilt.attributes.user_description.as_deref(),
            Some("Customer master")
        );
    }
}
