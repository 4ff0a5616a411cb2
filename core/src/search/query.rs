#![deny(missing_docs)]

//! # Query DSL
//!
//! Expressions of the search service's query language. A `Query` is built
//! from field handles (see `search::fields`) and combined with `and`, `or`
//! and `!`; it serializes to the JSON DSL the index search endpoint takes.

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::ops::{BitAnd, BitOr, Not};

/// Boolean combination of queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolQuery {
    /// Clauses that must match and contribute to scoring.
    pub must: Vec<Query>,
    /// Clauses that must match, without scoring.
    pub filter: Vec<Query>,
    /// Clauses of which at least `minimum_should_match` must match.
    pub should: Vec<Query>,
    /// Clauses that must not match.
    pub must_not: Vec<Query>,
    /// Number of `should` clauses required.
    pub minimum_should_match: Option<u32>,
}

/// A query expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Exact value.
    Term {
        /// Field searched.
        field: String,
        /// Value to match.
        value: Value,
        /// Ignore case (keyword fields only).
        case_insensitive: bool,
    },
    /// Any of several exact values.
    Terms {
        /// Field searched.
        field: String,
        /// Values to match.
        values: Vec<Value>,
    },
    /// Values starting with a prefix.
    Prefix {
        /// Field searched.
        field: String,
        /// Prefix to match.
        value: String,
        /// Ignore case.
        case_insensitive: bool,
    },
    /// Values matching a `*`/`?` pattern.
    Wildcard {
        /// Field searched.
        field: String,
        /// Pattern to match.
        value: String,
        /// Ignore case.
        case_insensitive: bool,
    },
    /// Values matching a regular expression.
    Regexp {
        /// Field searched.
        field: String,
        /// Expression to match.
        value: String,
    },
    /// Full-text match on an analyzed field.
    Match {
        /// Field searched.
        field: String,
        /// Text to match.
        query: String,
    },
    /// Values within bounds.
    Range {
        /// Field searched.
        field: String,
        /// Exclusive lower bound.
        gt: Option<Value>,
        /// Inclusive lower bound.
        gte: Option<Value>,
        /// Exclusive upper bound.
        lt: Option<Value>,
        /// Inclusive upper bound.
        lte: Option<Value>,
    },
    /// The field holds any value.
    Exists {
        /// Field searched.
        field: String,
    },
    /// Boolean combination.
    Bool(BoolQuery),
    /// Every document.
    MatchAll,
}

impl Query {
    /// Both this query and `other`.
    pub fn and(self, other: Query) -> Query {
        match self {
            Query::Bool(mut b) if b.should.is_empty() && b.must_not.is_empty() => {
                b.filter.push(other);
                Query::Bool(b)
            }
            this => Query::Bool(BoolQuery {
                filter: vec![this, other],
                ..Default::default()
            }),
        }
    }

    /// Either this query or `other`.
    pub fn or(self, other: Query) -> Query {
        match self {
            Query::Bool(mut b)
                if b.must.is_empty()
                    && b.filter.is_empty()
                    && b.must_not.is_empty()
                    && b.minimum_should_match == Some(1) =>
            {
                b.should.push(other);
                Query::Bool(b)
            }
            this => Query::Bool(BoolQuery {
                should: vec![this, other],
                minimum_should_match: Some(1),
                ..Default::default()
            }),
        }
    }

    /// The JSON DSL of this query.
    pub fn to_dsl(&self) -> Value {
        match self {
            Query::Term {
                field,
                value,
                case_insensitive,
            } => {
                let mut inner = Map::new();
                inner.insert("value".into(), value.clone());
                if *case_insensitive {
                    inner.insert("case_insensitive".into(), Value::Bool(true));
                }
                json!({ "term": { field.as_str(): inner } })
            }
            Query::Terms { field, values } => json!({ "terms": { field.as_str(): values } }),
            Query::Prefix {
                field,
                value,
                case_insensitive,
            } => pattern_dsl("prefix", field, value, *case_insensitive),
            Query::Wildcard {
                field,
                value,
                case_insensitive,
            } => pattern_dsl("wildcard", field, value, *case_insensitive),
            Query::Regexp { field, value } => {
                json!({ "regexp": { field.as_str(): { "value": value } } })
            }
            Query::Match { field, query } => {
                json!({ "match": { field.as_str(): { "query": query } } })
            }
            Query::Range {
                field,
                gt,
                gte,
                lt,
                lte,
            } => {
                let mut bounds = Map::new();
                for (key, bound) in [("gt", gt), ("gte", gte), ("lt", lt), ("lte", lte)] {
                    if let Some(v) = bound {
                        bounds.insert(key.into(), v.clone());
                    }
                }
                json!({ "range": { field.as_str(): bounds } })
            }
            Query::Exists { field } => json!({ "exists": { "field": field } }),
            Query::Bool(b) => {
                let mut inner = Map::new();
                for (key, clauses) in [
                    ("must", &b.must),
                    ("filter", &b.filter),
                    ("should", &b.should),
                    ("must_not", &b.must_not),
                ] {
                    if !clauses.is_empty() {
                        let dsl: Vec<Value> = clauses.iter().map(Query::to_dsl).collect();
                        inner.insert(key.into(), Value::Array(dsl));
                    }
                }
                if let Some(min) = b.minimum_should_match {
                    if !b.should.is_empty() {
                        inner.insert("minimum_should_match".into(), json!(min));
                    }
                }
                json!({ "bool": inner })
            }
            Query::MatchAll => json!({ "match_all": {} }),
        }
    }
}

fn pattern_dsl(kind: &str, field: &str, value: &str, case_insensitive: bool) -> Value {
    let mut inner = Map::new();
    inner.insert("value".into(), Value::String(value.to_string()));
    if case_insensitive {
        inner.insert("case_insensitive".into(), Value::Bool(true));
    }
    json!({ kind: { field: inner } })
}

impl Not for Query {
    type Output = Query;

    fn not(self) -> Query {
        Query::Bool(BoolQuery {
            must_not: vec![self],
            ..Default::default()
        })
    }
}

impl BitAnd for Query {
    type Output = Query;

    fn bitand(self, rhs: Query) -> Query {
        self.and(rhs)
    }
}

impl BitOr for Query {
    type Output = Query;

    fn bitor(self, rhs: Query) -> Query {
        self.or(rhs)
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_dsl().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn term(field: &str, value: &str) -> Query {
        Query::Term {
            field: field.into(),
            value: json!(value),
            case_insensitive: false,
        }
    }

    #[test]
    fn test_leaf_dsl() {
        assert_eq!(
            term("__typeName.keyword", "Table").to_dsl(),
            json!({"term": {"__typeName.keyword": {"value": "Table"}}})
        );
        assert_eq!(
            Query::Wildcard {
                field: "name.keyword".into(),
                value: "ord*".into(),
                case_insensitive: true
            }
            .to_dsl(),
            json!({"wildcard": {"name.keyword": {"value": "ord*", "case_insensitive": true}}})
        );
        assert_eq!(
            Query::Range {
                field: "rowCount".into(),
                gt: None,
                gte: Some(json!(10)),
                lt: Some(json!(100)),
                lte: None
            }
            .to_dsl(),
            json!({"range": {"rowCount": {"gte": 10, "lt": 100}}})
        );
        assert_eq!(
            Query::Exists {
                field: "description".into()
            }
            .to_dsl(),
            json!({"exists": {"field": "description"}})
        );
        assert_eq!(Query::MatchAll.to_dsl(), json!({"match_all": {}}));
    }

    #[test]
    fn test_and_flattens() {
        let q = term("a", "1") & term("b", "2") & term("c", "3");
        match &q {
            Query::Bool(b) => assert_eq!(b.filter.len(), 3),
            other => panic!("expected bool, got {:?}", other),
        }
    }

    #[test]
    fn test_or_and_not() {
        let q = (term("a", "1") | term("b", "2")).and(!term("c", "3"));
        assert_eq!(
            q.to_dsl(),
            json!({"bool": {"filter": [
                {"bool": {
                    "should": [
                        {"term": {"a": {"value": "1"}}},
                        {"term": {"b": {"value": "2"}}}
                    ],
                    "minimum_should_match": 1
                }},
                {"bool": {"must_not": [{"term": {"c": {"value": "3"}}}]}}
            ]}})
        );
    }

    #[test]
    fn test_serialize_matches_dsl() {
        let q = term("__state", "ACTIVE");
        assert_eq!(serde_json::to_value(&q).unwrap(), q.to_dsl());
    }
}
