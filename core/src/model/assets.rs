#![deny(missing_docs)]

//! # Typed Assets
//!
//! Attribute structs for the asset types modelled explicitly. Types not
//! listed here travel as `AssetDetails::Other`.

/// Implements `AssetType` and the `AssetDetails` conversion for a struct.
macro_rules! impl_asset_type {
    ($ty:ident, $type_name:literal) => {
        impl $crate::model::asset_type::AssetType for $ty {
            const TYPE_NAME: &'static str = $type_name;

            fn from_details(details: &$crate::model::asset::AssetDetails) -> Option<&Self> {
                match details {
                    $crate::model::asset::AssetDetails::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_details_mut(
                details: &mut $crate::model::asset::AssetDetails,
            ) -> Option<&mut Self> {
                match details {
                    $crate::model::asset::AssetDetails::$ty(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for $crate::model::asset::AssetDetails {
            fn from(inner: $ty) -> Self {
                $crate::model::asset::AssetDetails::$ty(inner)
            }
        }
    };
}

/// API specifications and paths.
pub mod api;

/// Airflow DAGs and tasks.
pub mod airflow;

/// BI dashboards.
pub mod bi;

/// SAP ERP views.
pub mod sap;

/// Relational tables.
pub mod sql;

pub use airflow::{AirflowDag, AirflowTask};
pub use api::{ApiPath, ApiSpec};
pub use bi::PowerBIDashboard;
pub use sap::SapErpView;
pub use sql::Table;
