//! # Airflow Assets
//!
//! DAGs and the tasks they schedule. Tasks are qualified under their DAG:
//! `default/airflow/<epoch>/<dag>/<task>`.

use crate::error::AtlanResult;
use crate::model::asset_type::AssetType;
use crate::model::builder::AssetBuilder;
use crate::model::null_as_default;
use crate::model::qualified_name::{
    connection_qualified_name, connector_from_qualified_name, name_from_qualified_name,
};
use crate::model::reference::Reference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Attributes of an Airflow DAG.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirflowDag {
    /// Cron expression or preset (`@daily`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_dag_schedule: Option<String>,
    /// Interval between runs, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_dag_schedule_delta: Option<i64>,
    /// Tags declared on the DAG in Airflow.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub airflow_tags: BTreeSet<String>,
    /// Airflow version of the last run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_run_version: Option<String>,
    /// Name of the last run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_run_name: Option<String>,
    /// Type of the last run (`scheduled`, `manual`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_run_type: Option<String>,
    /// Start of the last run, epoch ms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_run_start_time: Option<i64>,
    /// End of the last run, epoch ms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_run_end_time: Option<i64>,
    /// Tasks of the DAG.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub airflow_tasks: BTreeSet<Reference>,
}

impl_asset_type!(AirflowDag, "AirflowDag");

impl AirflowDag {
    /// Builder for a new DAG under an Airflow connection.
    pub fn creator(name: &str, connection_qualified_name: &str) -> AtlanResult<AssetBuilder<Self>> {
        let connector = connector_from_qualified_name(connection_qualified_name)?;
        Ok(AssetBuilder::<Self>::for_creation()
            .qualified_name(format!("{}/{}", connection_qualified_name, name))
            .name(name)
            .connection_qualified_name(connection_qualified_name)
            .connector_name(connector))
    }
}

impl AssetBuilder<AirflowDag> {
    /// Sets the schedule.
    pub fn airflow_dag_schedule(self, schedule: impl Into<String>) -> Self {
        let schedule = schedule.into();
        self.specific(|d| d.airflow_dag_schedule = Some(schedule))
    }

    /// Sets the schedule interval in seconds.
    pub fn airflow_dag_schedule_delta(self, seconds: i64) -> Self {
        self.specific(|d| d.airflow_dag_schedule_delta = Some(seconds))
    }

    /// Adds an Airflow tag.
    pub fn airflow_tag(self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.specific(|d| {
            d.airflow_tags.insert(tag);
        })
    }

    /// Links a task to the DAG.
    pub fn airflow_task(self, task: Reference) -> Self {
        self.specific(|d| {
            d.airflow_tasks.insert(task);
        })
    }
}

/// Attributes of an Airflow task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirflowTask {
    /// Operator implementing the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_task_operator_class: Option<String>,
    /// Name of the owning DAG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_dag_name: Option<String>,
    /// Qualified name of the owning DAG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_dag_qualified_name: Option<String>,
    /// Airflow connection the task uses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_task_connection_id: Option<String>,
    /// SQL executed by the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_task_sql: Option<String>,
    /// Retries before the task fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_task_retry_number: Option<i64>,
    /// Pool the task runs in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_task_pool: Option<String>,
    /// Pool slots the task occupies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_task_pool_slots: Option<i64>,
    /// Queue the task is sent to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_task_queue: Option<String>,
    /// Scheduling priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_task_priority_weight: Option<i64>,
    /// Rule deciding when the task triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_task_trigger_rule: Option<String>,
    /// Tags declared on the task in Airflow.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub airflow_tags: BTreeSet<String>,
    /// The owning DAG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airflow_dag: Option<Reference>,
    /// Assets the task reads.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub inputs: BTreeSet<Reference>,
    /// Assets the task writes.
    #[serde(
        skip_serializing_if = "BTreeSet::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub outputs: BTreeSet<Reference>,
}

impl_asset_type!(AirflowTask, "AirflowTask");

impl AirflowTask {
    /// Builder for a new task within the DAG `dag_qualified_name`.
    pub fn creator(name: &str, dag_qualified_name: &str) -> AtlanResult<AssetBuilder<Self>> {
        let connection = connection_qualified_name(dag_qualified_name)?;
        let connector = connector_from_qualified_name(&connection)?;
        let dag_name = name_from_qualified_name(dag_qualified_name).to_string();
        let dag_qn = dag_qualified_name.to_string();

        Ok(AssetBuilder::<Self>::for_creation()
            .qualified_name(format!("{}/{}", dag_qualified_name, name))
            .name(name)
            .connection_qualified_name(connection)
            .connector_name(connector)
            .specific(|t| {
                t.airflow_dag_name = Some(dag_name);
                t.airflow_dag = Some(AirflowDag::ref_by_qualified_name(&dag_qn));
                t.airflow_dag_qualified_name = Some(dag_qn);
            }))
    }
}

impl AssetBuilder<AirflowTask> {
    /// Sets the operator class.
    pub fn airflow_task_operator_class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.specific(|t| t.airflow_task_operator_class = Some(class))
    }

    /// Sets the SQL run by the task.
    pub fn airflow_task_sql(self, sql: impl Into<String>) -> Self {
        let sql = sql.into();
        self.specific(|t| t.airflow_task_sql = Some(sql))
    }

    /// Adds an asset the task reads.
    pub fn input(self, asset: Reference) -> Self {
        self.specific(|t| {
            t.inputs.insert(asset);
        })
    }

    /// Adds an asset the task writes.
    pub fn output(self, asset: Reference) -> Self {
        self.specific(|t| {
            t.outputs.insert(asset);
        })
    }
}

/// Searchable fields of Airflow assets.
pub mod fields {
    use crate::search::fields::{KeywordField, NumericField, RelationField};

    /// `airflowDagSchedule`
    pub const AIRFLOW_DAG_SCHEDULE: KeywordField = KeywordField::new("airflowDagSchedule");
    /// `airflowDagScheduleDelta`
    pub const AIRFLOW_DAG_SCHEDULE_DELTA: NumericField =
        NumericField::new("airflowDagScheduleDelta");
    /// `airflowTags`
    pub const AIRFLOW_TAGS: KeywordField = KeywordField::new("airflowTags");
    /// `airflowDagQualifiedName`
    pub const AIRFLOW_DAG_QUALIFIED_NAME: KeywordField =
        KeywordField::new("airflowDagQualifiedName");
    /// `airflowTaskOperatorClass`
    pub const AIRFLOW_TASK_OPERATOR_CLASS: KeywordField =
        KeywordField::new("airflowTaskOperatorClass");
    /// `airflowTaskRetryNumber`
    pub const AIRFLOW_TASK_RETRY_NUMBER: NumericField = NumericField::new("airflowTaskRetryNumber");
    /// `airflowTasks`
    pub const AIRFLOW_TASKS: RelationField = RelationField::new("airflowTasks");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::asset::Asset;
    use crate::model::assets::Table;
    use crate::model::enums::ConnectorType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_dag_creator() {
        let dag = AirflowDag::creator("etl", "default/airflow/123")
            .unwrap()
            .airflow_dag_schedule("@daily")
            .airflow_tag("finance")
            .build()
            .unwrap();
        assert_eq!(dag.qualified_name(), Some("default/airflow/123/etl"));
        assert_eq!(dag.attributes.connector_name, Some(ConnectorType::Airflow));
        assert_eq!(
            dag.typed::<AirflowDag>().unwrap().airflow_dag_schedule.as_deref(),
            Some("@daily")
        );
    }

    #[test]
    fn test_task_creator_links_dag() {
        let task = AirflowTask::creator("load", "default/airflow/123/etl")
            .unwrap()
            .airflow_task_operator_class("PostgresOperator")
            .input(Table::ref_by_qualified_name("default/postgres/1/db/raw/orders"))
            .build()
            .unwrap();

        assert_eq!(task.qualified_name(), Some("default/airflow/123/etl/load"));
        assert_eq!(
            task.attributes.connection_qualified_name.as_deref(),
            Some("default/airflow/123")
        );

        let written = serde_json::to_value(&task).unwrap();
        let attrs = &written["attributes"];
        assert_eq!(attrs["airflowDagName"], json!("etl"));
        assert_eq!(attrs["airflowDagQualifiedName"], json!("default/airflow/123/etl"));
        assert_eq!(
            attrs["airflowDag"],
            json!({
                "typeName": "AirflowDag",
                "uniqueAttributes": {"qualifiedName": "default/airflow/123/etl"}
            })
        );
        assert_eq!(
            attrs["inputs"],
            json!([{
                "typeName": "Table",
                "uniqueAttributes": {"qualifiedName": "default/postgres/1/db/raw/orders"}
            }])
        );
    }

    #[test]
    fn test_task_round_trip() {
        let task = AirflowTask::updater("default/airflow/123/etl/load", "load")
            .airflow_task_sql("INSERT INTO t SELECT * FROM s")
            .output(Table::ref_by_guid("t-guid"))
            .build()
            .unwrap();
        let back: Asset = serde_json::from_str(&serde_json::to_string(&task).unwrap()).unwrap();
        assert_eq!(back, task);
    }
}
