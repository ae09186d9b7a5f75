use common::types::{EntityName, FullyQualifiedEntityName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseRequest {
    pub name: EntityName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub service: FullyQualifiedEntityName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseSchemaRequest {
    pub name: EntityName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub database: FullyQualifiedEntityName,
}

///  ---------------- Tables ----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Int,
    Bigint,
    Varchar,
    String,
    Boolean,
    Timestamp,
    Array,
    Struct,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Column>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            description: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Column>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableRequest {
    pub name: EntityName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub database_schema: FullyQualifiedEntityName,
    pub columns: Vec<Column>,
}

impl CreateTableRequest {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

///  ---------------- Pipelines ----------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub downstream_tasks: Vec<String>,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            task_type: None,
            downstream_tasks: Vec::new(),
        }
    }

    pub fn with_downstream<I, S>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.downstream_tasks = tasks.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePipelineRequest {
    pub name: EntityName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub service: FullyQualifiedEntityName,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl CreatePipelineRequest {
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn task_names(&self) -> BTreeSet<String> {
        self.tasks.iter().map(|t| t.name.clone()).collect()
    }

    /// Task dependencies as `(from, to)` pairs in execution order.
    ///
    /// Each name listed in a task's `downstreamTasks` is a task that has to
    /// run before it, so it becomes the `from` side of the edge.
    pub fn task_edges(&self) -> BTreeSet<(String, String)> {
        self.tasks
            .iter()
            .flat_map(|t| {
                t.downstream_tasks
                    .iter()
                    .map(move |d| (d.clone(), t.name.clone()))
            })
            .collect()
    }
}
