use atlan_core::model::io::{parse_assets, DocumentFormat};
use atlan_core::search::fields;
use atlan_core::{
    AirflowDag, AirflowTask, ApiSpec, Asset, AssetType, AtlanClient, ClientConfig,
    MockTransport, SortOrder, Table,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn client(mock: &MockTransport, page_size: u32) -> AtlanClient {
    let config = ClientConfig::new("https://tenant.atlan.com")
        .unwrap()
        .with_page_size(page_size);
    AtlanClient::new(config, mock.clone())
}

#[test]
fn test_create_dag_and_task_in_one_save() {
    let dag = AirflowDag::creator("etl", "default/airflow/1700000000")
        .unwrap()
        .airflow_dag_schedule("@daily")
        .build()
        .unwrap();
    let task = AirflowTask::creator("load", dag.qualified_name().unwrap())
        .unwrap()
        .input(Table::ref_by_qualified_name("default/postgres/1/shop/raw/orders"))
        .build()
        .unwrap();

    let dag_placeholder = dag.guid().unwrap().to_string();
    let task_placeholder = task.guid().unwrap().to_string();
    assert_ne!(dag_placeholder, task_placeholder);

    let mock = MockTransport::new();
    mock.respond_json(&json!({
        "mutatedEntities": {"CREATE": [
            {"typeName": "AirflowDag", "guid": "g-dag", "attributes": {"qualifiedName": "default/airflow/1700000000/etl", "name": "etl"}},
            {"typeName": "AirflowTask", "guid": "g-task", "attributes": {"qualifiedName": "default/airflow/1700000000/etl/load", "name": "load"}}
        ]},
        "guidAssignments": {dag_placeholder.as_str(): "g-dag", task_placeholder.as_str(): "g-task"}
    }));
    let client = client(&mock, 100);

    let response = client.assets().save(&[dag, task], false).unwrap();
    assert_eq!(response.created_assets().len(), 2);
    assert_eq!(response.assigned_guid(&dag_placeholder), Some("g-dag"));
    assert_eq!(response.assigned_guid(&task_placeholder), Some("g-task"));

    let body = mock.last_request().unwrap().body.unwrap();
    let entities = body["entities"].as_array().unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0]["guid"], json!(dag_placeholder));
    assert_eq!(
        entities[1]["attributes"]["airflowDag"],
        json!({
            "typeName": "AirflowDag",
            "uniqueAttributes": {"qualifiedName": "default/airflow/1700000000/etl"}
        })
    );
}

#[test]
fn test_saving_a_file_of_assets() {
    let yaml = r#"
- typeName: APISpec
  attributes:
    qualifiedName: default/api/1/petstore
    name: petstore
    apiSpecVersion: 3.0.0
- typeName: KafkaTopic
  attributes:
    qualifiedName: default/kafka/1/orders
    name: orders
    kafkaTopicPartitionsCount: 12
"#;
    let assets: Vec<Asset> = parse_assets(yaml, DocumentFormat::Yaml, "assets.yaml").unwrap();
    assert_eq!(
        assets[0].typed::<ApiSpec>().unwrap().api_spec_version.as_deref(),
        Some("3.0.0")
    );

    let mock = MockTransport::new();
    mock.respond_json(&json!({"mutatedEntities": {}}));
    let client = client(&mock, 100);
    client.assets().save(&assets, true).unwrap();

    let request = mock.last_request().unwrap();
    assert_eq!(request.query_values("replaceClassifications"), vec!["true"]);
    let body = request.body.unwrap();
    assert_eq!(
        body["entities"][1],
        json!({
            "typeName": "KafkaTopic",
            "attributes": {
                "qualifiedName": "default/kafka/1/orders",
                "name": "orders",
                "kafkaTopicPartitionsCount": 12
            }
        })
    );
}

#[test]
fn test_stream_across_pages() {
    let mock = MockTransport::new();
    mock.respond_json(&json!({"approximateCount": 3, "entities": [
        {"typeName": "Table", "guid": "a", "attributes": {"qualifiedName": "a", "name": "a"}},
        {"typeName": "Table", "guid": "b", "attributes": {"qualifiedName": "b", "name": "b"}}
    ]}))
    .respond_json(&json!({"approximateCount": 3, "entities": [
        {"typeName": "Table", "guid": "c", "attributes": {"qualifiedName": "c", "name": "c"}}
    ]}));
    let client = client(&mock, 2);

    let names: Vec<String> = Table::select(&client)
        .where_(fields::QUALIFIED_NAME.starts_with("default/postgres/"))
        .sort(fields::NAME.order(SortOrder::Asc))
        .stream()
        .map(|asset| asset.unwrap().name().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    let second = requests[1].body.as_ref().unwrap();
    assert_eq!(second["dsl"]["from"], json!(2));
    assert_eq!(second["dsl"]["size"], json!(2));
    assert_eq!(
        second["dsl"]["sort"],
        json!([{"name.keyword": {"order": "asc"}}, {"__guid": {"order": "asc"}}])
    );
}
