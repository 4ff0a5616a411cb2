#![deny(missing_docs)]

//! # Searchable Fields
//!
//! Typed handles for fields of the search index. Each kind of field only
//! offers the predicates its index mapping supports. Per-type fields live in
//! the `fields` module next to each typed asset.

use crate::search::query::Query;
use crate::search::request::{SortItem, SortOrder};
use serde_json::Value;
use std::borrow::Cow;

macro_rules! field_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            name: Cow<'static, str>,
        }

        impl $name {
            /// Handle for an index field known at compile time.
            pub const fn new(name: &'static str) -> Self {
                Self {
                    name: Cow::Borrowed(name),
                }
            }

            /// Handle for an index field named at runtime.
            pub fn named(name: impl Into<String>) -> Self {
                Self {
                    name: Cow::Owned(name.into()),
                }
            }

            /// Name of the field in the index.
            pub fn name(&self) -> &str {
                &self.name
            }

            /// Matches documents where the field holds any value.
            pub fn has_any_value(&self) -> Query {
                Query::Exists {
                    field: self.name.to_string(),
                }
            }
        }
    };
}

field_handle!(
    /// A field indexed as an exact keyword.
    KeywordField
);
field_handle!(
    /// A field indexed for full-text search.
    TextField
);
field_handle!(
    /// A numeric (or date, as epoch ms) field.
    NumericField
);
field_handle!(
    /// A boolean field.
    BooleanField
);
field_handle!(
    /// A relationship; only its presence can be searched.
    RelationField
);

impl KeywordField {
    /// Exact match.
    pub fn eq(&self, value: impl Into<String>) -> Query {
        Query::Term {
            field: self.name.to_string(),
            value: Value::String(value.into()),
            case_insensitive: false,
        }
    }

    /// Exact match ignoring case.
    pub fn eq_ignore_case(&self, value: impl Into<String>) -> Query {
        Query::Term {
            field: self.name.to_string(),
            value: Value::String(value.into()),
            case_insensitive: true,
        }
    }

    /// Any of the given values.
    pub fn within<I, S>(&self, values: I) -> Query
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Query::Terms {
            field: self.name.to_string(),
            values: values
                .into_iter()
                .map(|v| Value::String(v.into()))
                .collect(),
        }
    }

    /// Values starting with `prefix`.
    pub fn starts_with(&self, prefix: impl Into<String>) -> Query {
        Query::Prefix {
            field: self.name.to_string(),
            value: prefix.into(),
            case_insensitive: false,
        }
    }

    /// Values starting with `prefix`, ignoring case.
    pub fn starts_with_ignore_case(&self, prefix: impl Into<String>) -> Query {
        Query::Prefix {
            field: self.name.to_string(),
            value: prefix.into(),
            case_insensitive: true,
        }
    }

    /// Values matching a `*`/`?` pattern.
    pub fn wildcard(&self, pattern: impl Into<String>) -> Query {
        Query::Wildcard {
            field: self.name.to_string(),
            value: pattern.into(),
            case_insensitive: false,
        }
    }

    /// Values matching a regular expression.
    pub fn regex(&self, pattern: impl Into<String>) -> Query {
        Query::Regexp {
            field: self.name.to_string(),
            value: pattern.into(),
        }
    }

    /// Sort on this field.
    pub fn order(&self, order: SortOrder) -> SortItem {
        SortItem::new(self.name.to_string(), order)
    }
}

impl TextField {
    /// Full-text match.
    pub fn matches(&self, text: impl Into<String>) -> Query {
        Query::Match {
            field: self.name.to_string(),
            query: text.into(),
        }
    }
}

impl NumericField {
    fn range(
        &self,
        gt: Option<Value>,
        gte: Option<Value>,
        lt: Option<Value>,
        lte: Option<Value>,
    ) -> Query {
        Query::Range {
            field: self.name.to_string(),
            gt,
            gte,
            lt,
            lte,
        }
    }

    /// Exact value.
    pub fn eq(&self, value: impl Into<Value>) -> Query {
        Query::Term {
            field: self.name.to_string(),
            value: value.into(),
            case_insensitive: false,
        }
    }

    /// Strictly greater than.
    pub fn gt(&self, value: impl Into<Value>) -> Query {
        self.range(Some(value.into()), None, None, None)
    }

    /// Greater than or equal.
    pub fn gte(&self, value: impl Into<Value>) -> Query {
        self.range(None, Some(value.into()), None, None)
    }

    /// Strictly less than.
    pub fn lt(&self, value: impl Into<Value>) -> Query {
        self.range(None, None, Some(value.into()), None)
    }

    /// Less than or equal.
    pub fn lte(&self, value: impl Into<Value>) -> Query {
        self.range(None, None, None, Some(value.into()))
    }

    /// Within `[from, to]`, both inclusive.
    pub fn between(&self, from: impl Into<Value>, to: impl Into<Value>) -> Query {
        self.range(None, Some(from.into()), None, Some(to.into()))
    }

    /// Sort on this field.
    pub fn order(&self, order: SortOrder) -> SortItem {
        SortItem::new(self.name.to_string(), order)
    }
}

impl BooleanField {
    /// Exact value.
    pub fn eq(&self, value: bool) -> Query {
        Query::Term {
            field: self.name.to_string(),
            value: Value::Bool(value),
            case_insensitive: false,
        }
    }
}

/// Type name of the asset.
pub const TYPE_NAME: KeywordField = KeywordField::new("__typeName.keyword");
/// Every super type of the asset.
pub const SUPER_TYPE_NAMES: KeywordField = KeywordField::new("__superTypeNames.keyword");
/// GUID of the asset.
pub const GUID: KeywordField = KeywordField::new("__guid");
/// Lifecycle state (`ACTIVE`, `DELETED`).
pub const STATE: KeywordField = KeywordField::new("__state");
/// Qualified name.
pub const QUALIFIED_NAME: KeywordField = KeywordField::new("qualifiedName");
/// Name, exact.
pub const NAME: KeywordField = KeywordField::new("name.keyword");
/// Name, analyzed.
pub const NAME_TEXT: TextField = TextField::new("name");
/// Crawled description.
pub const DESCRIPTION: TextField = TextField::new("description");
/// User-written description.
pub const USER_DESCRIPTION: TextField = TextField::new("userDescription");
/// Certificate status.
pub const CERTIFICATE_STATUS: KeywordField = KeywordField::new("certificateStatus");
/// Announcement type.
pub const ANNOUNCEMENT_TYPE: KeywordField = KeywordField::new("announcementType");
/// Owning users.
pub const OWNER_USERS: KeywordField = KeywordField::new("ownerUsers");
/// Owning groups.
pub const OWNER_GROUPS: KeywordField = KeywordField::new("ownerGroups");
/// Tags attached directly.
pub const ATLAN_TAGS: KeywordField = KeywordField::new("__traitNames");
/// Tags attached through propagation.
pub const PROPAGATED_ATLAN_TAGS: KeywordField = KeywordField::new("__propagatedTraitNames");
/// Assigned glossary terms, by qualified name.
pub const ASSIGNED_TERMS: KeywordField = KeywordField::new("__meanings");
/// Connector.
pub const CONNECTOR_NAME: KeywordField = KeywordField::new("connectorName");
/// Connection the asset belongs to.
pub const CONNECTION_QUALIFIED_NAME: KeywordField = KeywordField::new("connectionQualifiedName");
/// Creation time, epoch ms.
pub const CREATE_TIME: NumericField = NumericField::new("__timestamp");
/// Last update time, epoch ms.
pub const UPDATE_TIME: NumericField = NumericField::new("__modificationTimestamp");
/// Whether lineage exists.
pub const HAS_LINEAGE: BooleanField = BooleanField::new("__hasLineage");
/// Processes consuming the asset.
pub const INPUT_TO_PROCESSES: RelationField = RelationField::new("inputToProcesses");
/// Processes producing the asset.
pub const OUTPUT_FROM_PROCESSES: RelationField = RelationField::new("outputFromProcesses");

/// Resolves the keyword field used to filter on an attribute given by
/// name, mapping the common attribute names onto their index fields.
pub fn keyword_for(attribute: &str) -> KeywordField {
    match attribute {
        "typeName" => TYPE_NAME,
        "guid" => GUID,
        "status" | "state" => STATE,
        "name" => NAME,
        "tag" | "atlanTags" => ATLAN_TAGS,
        "term" | "meanings" => ASSIGNED_TERMS,
        other => KeywordField::named(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_keyword_predicates() {
        assert_eq!(
            CERTIFICATE_STATUS.eq("VERIFIED").to_dsl(),
            json!({"term": {"certificateStatus": {"value": "VERIFIED"}}})
        );
        assert_eq!(
            NAME.eq_ignore_case("Orders").to_dsl(),
            json!({"term": {"name.keyword": {"value": "Orders", "case_insensitive": true}}})
        );
        assert_eq!(
            TYPE_NAME.within(["Table", "View"]).to_dsl(),
            json!({"terms": {"__typeName.keyword": ["Table", "View"]}})
        );
        assert_eq!(
            QUALIFIED_NAME.starts_with("default/airflow/").to_dsl(),
            json!({"prefix": {"qualifiedName": {"value": "default/airflow/"}}})
        );
    }

    #[test]
    fn test_numeric_predicates() {
        assert_eq!(
            UPDATE_TIME.between(1, 2).to_dsl(),
            json!({"range": {"__modificationTimestamp": {"gte": 1, "lte": 2}}})
        );
        assert_eq!(
            CREATE_TIME.gt(5).to_dsl(),
            json!({"range": {"__timestamp": {"gt": 5}}})
        );
        assert_eq!(
            NumericField::new("rowCount").eq(0).to_dsl(),
            json!({"term": {"rowCount": {"value": 0}}})
        );
    }

    #[test]
    fn test_other_fields() {
        assert_eq!(
            HAS_LINEAGE.eq(true).to_dsl(),
            json!({"term": {"__hasLineage": {"value": true}}})
        );
        assert_eq!(
            INPUT_TO_PROCESSES.has_any_value().to_dsl(),
            json!({"exists": {"field": "inputToProcesses"}})
        );
        assert_eq!(
            DESCRIPTION.matches("revenue").to_dsl(),
            json!({"match": {"description": {"query": "revenue"}}})
        );
    }

    #[test]
    fn test_keyword_for() {
        assert_eq!(keyword_for("typeName"), TYPE_NAME);
        assert_eq!(keyword_for("tag"), ATLAN_TAGS);
        assert_eq!(keyword_for("sapLogicalName").name(), "sapLogicalName");
    }
}
