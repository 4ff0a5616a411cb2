#![deny(missing_docs)]

//! # Enumerations
//!
//! Closed value sets used by asset attributes and API parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Certification state of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateStatus {
    /// Work in progress.
    Draft,
    /// Trusted for use.
    Verified,
    /// Should no longer be used.
    Deprecated,
}

impl CertificateStatus {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStatus::Draft => "DRAFT",
            CertificateStatus::Verified => "VERIFIED",
            CertificateStatus::Deprecated => "DEPRECATED",
        }
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CertificateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(CertificateStatus::Draft),
            "VERIFIED" => Ok(CertificateStatus::Verified),
            "DEPRECATED" => Ok(CertificateStatus::Deprecated),
            other => Err(format!("unknown certificate status '{}'", other)),
        }
    }
}

/// Kind of announcement banner attached to an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementType {
    /// Informational notice.
    Information,
    /// Something to be careful about.
    Warning,
    /// A known problem.
    Issue,
}

impl AnnouncementType {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementType::Information => "information",
            AnnouncementType::Warning => "warning",
            AnnouncementType::Issue => "issue",
        }
    }
}

impl fmt::Display for AnnouncementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnouncementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "information" | "info" => Ok(AnnouncementType::Information),
            "warning" => Ok(AnnouncementType::Warning),
            "issue" => Ok(AnnouncementType::Issue),
            other => Err(format!("unknown announcement type '{}'", other)),
        }
    }
}

/// Lifecycle state of an entity in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    /// Live.
    Active,
    /// Soft-deleted (archived), restorable.
    Deleted,
    /// Permanently removed.
    Purged,
}

impl EntityStatus {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "ACTIVE",
            EntityStatus::Deleted => "DELETED",
            EntityStatus::Purged => "PURGED",
        }
    }
}

/// How a delete request removes entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeleteType {
    /// Archive: the entity can be restored.
    Soft,
    /// Remove the entity, keeping audit history.
    Hard,
    /// Remove the entity and its history.
    Purge,
}

impl DeleteType {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteType::Soft => "SOFT",
            DeleteType::Hard => "HARD",
            DeleteType::Purge => "PURGE",
        }
    }
}

/// Source system an asset was crawled from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConnectorType {
    /// Apache Airflow.
    Airflow,
    /// OpenAPI specifications.
    Api,
    /// Microsoft Power BI.
    PowerBi,
    /// SAP ERP.
    SapErp,
    /// Snowflake.
    Snowflake,
    /// PostgreSQL.
    Postgres,
    /// Tableau.
    Tableau,
    /// Databricks.
    Databricks,
    /// Any connector without a dedicated variant.
    Other(String),
}

impl ConnectorType {
    /// Wire value (the second segment of a connection qualified name).
    pub fn as_str(&self) -> &str {
        match self {
            ConnectorType::Airflow => "airflow",
            ConnectorType::Api => "api",
            ConnectorType::PowerBi => "powerbi",
            ConnectorType::SapErp => "sap-erp",
            ConnectorType::Snowflake => "snowflake",
            ConnectorType::Postgres => "postgres",
            ConnectorType::Tableau => "tableau",
            ConnectorType::Databricks => "databricks",
            ConnectorType::Other(s) => s,
        }
    }

    /// Parses a wire value; unknown values become `Other`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "airflow" => ConnectorType::Airflow,
            "api" => ConnectorType::Api,
            "powerbi" => ConnectorType::PowerBi,
            "sap-erp" => ConnectorType::SapErp,
            "snowflake" => ConnectorType::Snowflake,
            "postgres" => ConnectorType::Postgres,
            "tableau" => ConnectorType::Tableau,
            "databricks" => ConnectorType::Databricks,
            other => ConnectorType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConnectorType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConnectorType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ConnectorType::from_value(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_wire_names() {
        assert_eq!(
            serde_json::to_string(&CertificateStatus::Verified).unwrap(),
            "\"VERIFIED\""
        );
        assert_eq!(
            "deprecated".parse::<CertificateStatus>().unwrap(),
            CertificateStatus::Deprecated
        );
        assert!("gold".parse::<CertificateStatus>().is_err());
    }

    #[test]
    fn test_announcement_wire_names() {
        assert_eq!(
            serde_json::to_string(&AnnouncementType::Issue).unwrap(),
            "\"issue\""
        );
        let parsed: AnnouncementType = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, AnnouncementType::Warning);
    }

    #[test]
    fn test_connector_unknown_values_survive() {
        let parsed: ConnectorType = serde_json::from_str("\"mongodb\"").unwrap();
        assert_eq!(parsed, ConnectorType::Other("mongodb".into()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"mongodb\"");
        assert_eq!(ConnectorType::from_value("sap-erp"), ConnectorType::SapErp);
    }
}
