use common::types::EntityName;
use serde::{Deserialize, Serialize};

///  ---------------- Pipeline services ----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineServiceType {
    Airflow,
    Dagster,
    Nifi,
}

/// How the orchestrator exposes its own metadata to the ingestion process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AirflowMetadataConnection {
    /// Read metadata straight from the orchestrator's backend database.
    Backend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirflowConnection {
    #[serde(rename = "type")]
    pub connection_type: PipelineServiceType,
    pub host_port: String,
    #[serde(default = "default_number_of_status")]
    pub number_of_status: u32,
    pub connection: AirflowMetadataConnection,
}

fn default_number_of_status() -> u32 {
    10
}

impl AirflowConnection {
    pub fn new(host_port: impl Into<String>, connection: AirflowMetadataConnection) -> Self {
        Self {
            connection_type: PipelineServiceType::Airflow,
            host_port: host_port.into(),
            number_of_status: default_number_of_status(),
            connection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConnection {
    pub config: AirflowConnection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePipelineServiceRequest {
    pub name: EntityName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub service_type: PipelineServiceType,
    pub connection: PipelineConnection,
}

///  ---------------- Database services ----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseServiceType {
    Mysql,
    Postgres,
    Snowflake,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MysqlConnection {
    #[serde(rename = "type")]
    pub connection_type: DatabaseServiceType,
    pub scheme: String,
    pub username: String,
    pub auth_type: BasicAuth,
    pub host_port: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
}

impl MysqlConnection {
    pub const DEFAULT_SCHEME: &'static str = "mysql+pymysql";

    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        host_port: impl Into<String>,
    ) -> Self {
        Self {
            connection_type: DatabaseServiceType::Mysql,
            scheme: Self::DEFAULT_SCHEME.to_string(),
            username: username.into(),
            auth_type: BasicAuth {
                password: password.into(),
            },
            host_port: host_port.into(),
            database_name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConnection {
    pub config: MysqlConnection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseServiceRequest {
    pub name: EntityName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub service_type: DatabaseServiceType,
    pub connection: DatabaseConnection,
}
