//! # SQL Assets
//!
//! Tables, qualified as `default/<connector>/<epoch>/<database>/<schema>/<table>`.

use crate::error::{AtlanResult, ErrorCode};
use crate::model::builder::AssetBuilder;
use crate::model::null_as_default;
use crate::model::qualified_name::{
    connection_qualified_name, connector_from_qualified_name, name_from_qualified_name,
    parent_qualified_name, prefix_segments,
};
use crate::model::reference::Reference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Type name of schemas, the parents of tables.
pub const SCHEMA_TYPE: &str = "Schema";

/// Attributes of a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    /// Name of the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    /// Qualified name of the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_qualified_name: Option<String>,
    /// Name of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Qualified name of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_qualified_name: Option<String>,
    /// Number of columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_count: Option<i64>,
    /// Number of rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<i64>,
    /// Size on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,
    /// Whether the table is partitioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_partitioned: Option<bool>,
    /// The owning schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atlan_schema: Option<Reference>,
    /// Columns of the table.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub columns: BTreeSet<Reference>,
}

impl_asset_type!(Table, "Table");

impl Table {
    /// Builder for a new table within the schema `schema_qualified_name`.
    pub fn creator(name: &str, schema_qualified_name: &str) -> AtlanResult<AssetBuilder<Self>> {
        let connection = connection_qualified_name(schema_qualified_name)?;
        let connector = connector_from_qualified_name(&connection)?;
        let database_qn = prefix_segments(schema_qualified_name, 4)
            .filter(|_| schema_qualified_name.split('/').count() == 5)
            .ok_or_else(|| {
                ErrorCode::InvalidQualifiedName.error(&[
                    schema_qualified_name,
                    "default/<connector>/<epoch>/<database>/<schema>",
                ])
            })?;
        let database_name = name_from_qualified_name(&database_qn).to_string();
        let schema_name = name_from_qualified_name(schema_qualified_name).to_string();
        let schema_qn = schema_qualified_name.to_string();

        Ok(AssetBuilder::<Self>::for_creation()
            .qualified_name(format!("{}/{}", schema_qualified_name, name))
            .name(name)
            .connection_qualified_name(connection)
            .connector_name(connector)
            .specific(|t| {
                t.database_name = Some(database_name);
                t.database_qualified_name = Some(database_qn);
                t.schema_name = Some(schema_name);
                t.atlan_schema = Some(Reference::by_qualified_name(SCHEMA_TYPE, &schema_qn));
                t.schema_qualified_name = Some(schema_qn);
            }))
    }
}

impl AssetBuilder<Table> {
    /// Sets the column count.
    pub fn column_count(self, count: i64) -> Self {
        self.specific(|t| t.column_count = Some(count))
    }

    /// Sets the row count.
    pub fn row_count(self, count: i64) -> Self {
        self.specific(|t| t.row_count = Some(count))
    }

    /// Links a column to the table.
    pub fn column(self, column: Reference) -> Self {
        self.specific(|t| {
            t.columns.insert(column);
        })
    }
}

impl Table {
    /// Reference to the schema holding a table, derived from its qualified name.
    pub fn schema_ref(table_qualified_name: &str) -> Option<Reference> {
        parent_qualified_name(table_qualified_name)
            .map(|qn| Reference::by_qualified_name(SCHEMA_TYPE, qn))
    }
}

/// Searchable fields of SQL assets.
pub mod fields {
    use crate::search::fields::{KeywordField, NumericField, RelationField};

    /// `schemaName`
    pub const SCHEMA_NAME: KeywordField = KeywordField::new("schemaName");
    /// `schemaQualifiedName`
    pub const SCHEMA_QUALIFIED_NAME: KeywordField = KeywordField::new("schemaQualifiedName");
    /// `databaseName`
    pub const DATABASE_NAME: KeywordField = KeywordField::new("databaseName");
    /// `databaseQualifiedName`
    pub const DATABASE_QUALIFIED_NAME: KeywordField = KeywordField::new("databaseQualifiedName");
    /// `columnCount`
    pub const COLUMN_COUNT: NumericField = NumericField::new("columnCount");
    /// `rowCount`
    pub const ROW_COUNT: NumericField = NumericField::new("rowCount");
    /// `sizeBytes`
    pub const SIZE_BYTES: NumericField = NumericField::new("sizeBytes");
    /// `columns`
    pub const COLUMNS: RelationField = RelationField::new("columns");
}
