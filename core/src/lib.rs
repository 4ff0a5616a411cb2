#![deny(missing_docs)]

//! # Atlan Core
//!
//! Client library for the Atlan metadata catalog: typed assets with
//! builders, references between them, fluent index search, and the base
//! operations (get, save, delete, tags, terms, certificates, announcements)
//! issued through an `AtlanClient`.

/// Shared error types.
pub mod error;

/// Client configuration.
pub mod config;

/// Typed assets and their wire format.
pub mod model;

/// Index search.
pub mod search;

/// REST client and base operations.
pub mod client;

pub use client::{
    ApiRequest, ApiResponse, AssetClient, AtlanClient, GetOptions, HttpMethod, MockTransport,
    Transport,
};
pub use config::ClientConfig;
pub use error::{AtlanError, AtlanResult, ErrorCode, ErrorDetail};
pub use model::assets::{
    AirflowDag, AirflowTask, ApiPath, ApiSpec, PowerBIDashboard, SapErpView, Table,
};
pub use model::{
    AnnouncementType, Asset, AssetBuilder, AssetDetails, AssetType, AtlanTag, CertificateStatus,
    ConnectorType, DeleteType, EntityStatus, MutationResponse, Reference,
};
pub use search::{fields, AssetPager, FluentSearch, IndexSearchRequest, Query, SortOrder};
