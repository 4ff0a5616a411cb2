//! Request constructors for the catalog REST API. Each function only
//! describes the request; sending it is up to `AtlanClient`.

use crate::client::{ApiRequest, HttpMethod};
use crate::model::enums::DeleteType;
use serde_json::Value;

const API: &str = "api";
const META: &str = "meta";
const ENTITY: &str = "entity";

/// Query key selecting an entity by qualified name.
pub const QUALIFIED_NAME_PARAM: &str = "attr:qualifiedName";

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `GET api/meta/entity/guid/{guid}`
pub fn get_entity_by_guid(guid: &str, min_ext_info: bool, ignore_relationships: bool) -> ApiRequest {
    ApiRequest::new(HttpMethod::Get, &[API, META, ENTITY, "guid", guid])
        .query("minExtInfo", flag(min_ext_info))
        .query("ignoreRelationships", flag(ignore_relationships))
}

/// `GET api/meta/entity/uniqueAttribute/type/{type}?attr:qualifiedName=..`
pub fn get_entity_by_qualified_name(
    type_name: &str,
    qualified_name: &str,
    min_ext_info: bool,
    ignore_relationships: bool,
) -> ApiRequest {
    ApiRequest::new(
        HttpMethod::Get,
        &[API, META, ENTITY, "uniqueAttribute", "type", type_name],
    )
    .query(QUALIFIED_NAME_PARAM, qualified_name)
    .query("minExtInfo", flag(min_ext_info))
    .query("ignoreRelationships", flag(ignore_relationships))
}

/// `POST api/meta/entity/bulk` with `{"entities": [...]}`.
pub fn save_entities(entities: Value, replace_tags: bool) -> ApiRequest {
    ApiRequest::new(HttpMethod::Post, &[API, META, ENTITY, "bulk"])
        .query("replaceClassifications", flag(replace_tags))
        .query("replaceBusinessAttributes", "false")
        .query("overwriteBusinessAttributes", "false")
        .body(serde_json::json!({ "entities": entities }))
}

/// `DELETE api/meta/entity/bulk?guid=..&deleteType=..`
pub fn delete_entities(guids: &[&str], delete_type: DeleteType) -> ApiRequest {
    guids
        .iter()
        .fold(
            ApiRequest::new(HttpMethod::Delete, &[API, META, ENTITY, "bulk"]),
            |request, guid| request.query("guid", *guid),
        )
        .query("deleteType", delete_type.as_str())
}

/// `POST api/meta/entity/restore/bulk?guid=..`
pub fn restore_entities(guids: &[&str]) -> ApiRequest {
    guids.iter().fold(
        ApiRequest::new(HttpMethod::Post, &[API, META, ENTITY, "restore", "bulk"]),
        |request, guid| request.query("guid", *guid),
    )
}

/// `POST api/meta/search/indexsearch`
pub fn index_search(request: Value) -> ApiRequest {
    ApiRequest::new(HttpMethod::Post, &[API, META, "search", "indexsearch"]).body(request)
}

/// `POST api/meta/entity/uniqueAttribute/type/{type}/classifications` with a list of tags.
pub fn add_classifications(type_name: &str, qualified_name: &str, tags: Value) -> ApiRequest {
    ApiRequest::new(
        HttpMethod::Post,
        &[
            API,
            META,
            ENTITY,
            "uniqueAttribute",
            "type",
            type_name,
            "classifications",
        ],
    )
    .query(QUALIFIED_NAME_PARAM, qualified_name)
    .body(tags)
}

/// `DELETE api/meta/entity/uniqueAttribute/type/{type}/classification/{tag}`
pub fn remove_classification(type_name: &str, qualified_name: &str, tag: &str) -> ApiRequest {
    ApiRequest::new(
        HttpMethod::Delete,
        &[
            API,
            META,
            ENTITY,
            "uniqueAttribute",
            "type",
            type_name,
            "classification",
            tag,
        ],
    )
    .query(QUALIFIED_NAME_PARAM, qualified_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(
            get_entity_by_guid("g", false, true).path(),
            "api/meta/entity/guid/g"
        );
        assert_eq!(
            get_entity_by_qualified_name("Table", "default/x/1/t", true, true).path(),
            "api/meta/entity/uniqueAttribute/type/Table"
        );
        assert_eq!(index_search(json!({})).path(), "api/meta/search/indexsearch");
        assert_eq!(
            remove_classification("Table", "q", "PII").path(),
            "api/meta/entity/uniqueAttribute/type/Table/classification/PII"
        );
    }

    #[test]
    fn test_delete_repeats_guid() {
        let request = delete_entities(&["a", "b"], DeleteType::Purge);
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.query_values("guid"), vec!["a", "b"]);
        assert_eq!(request.query_values("deleteType"), vec!["PURGE"]);
    }

    #[test]
    fn test_save_wraps_entities() {
        let request = save_entities(json!([{"typeName": "Table"}]), true);
        assert_eq!(request.query_values("replaceClassifications"), vec!["true"]);
        assert_eq!(
            request.body,
            Some(json!({"entities": [{"typeName": "Table"}]}))
        );
    }
}
