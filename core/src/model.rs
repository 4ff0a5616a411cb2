#![deny(missing_docs)]

//! # Asset Model
//!
//! Typed representation of catalog entities: the shared `Asset` envelope, the
//! per-type attribute structs, references between entities, and the
//! responses returned by mutating calls.

/// Closed value sets (certificates, announcements, statuses, connectors).
pub mod enums;

/// Qualified name helpers.
pub mod qualified_name;

/// References to other entities and tag assignments.
pub mod reference;

/// The `Asset` envelope and its wire format.
pub mod asset;

/// Fluent construction of assets.
pub mod builder;

/// The capability trait implemented by every typed asset.
pub mod asset_type;

/// Per-type attribute structs.
pub mod assets;

/// Responses of create / update / delete calls.
pub mod mutation;

/// Loading asset lists from JSON or YAML documents.
pub mod io;

pub use asset::{Asset, AssetAttributes, AssetDetails};
pub use asset_type::AssetType;
pub use builder::AssetBuilder;
pub use enums::{AnnouncementType, CertificateStatus, ConnectorType, DeleteType, EntityStatus};
pub use mutation::MutationResponse;
pub use reference::{AtlanTag, Reference, UniqueAttributes};

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default, for collections the API may
/// send as `null` instead of omitting.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
