//! Kind-keyed factories for default create requests.
//!
//! Two registries live here, one for services and one for data entities.
//! They are separate types keyed by separate enums, so a kind missing from
//! one can never resolve through the other. Adding support for a new kind
//! means writing a builder below and adding it to the matching initialiser.

use catalog::{
    AirflowConnection, AirflowMetadataConnection, Column, CreateDatabaseRequest,
    CreateDatabaseSchemaRequest, CreateDatabaseServiceRequest, CreatePipelineRequest,
    CreatePipelineServiceRequest, CreateTableRequest, DataType, DatabaseConnection,
    DatabaseServiceType, EntityKind, EntityRequest, MysqlConnection, PipelineConnection,
    PipelineServiceType, ServiceKind, ServiceRequest, Task,
};
use common::types::{EntityName, FullyQualifiedEntityName};
use once_cell::sync::Lazy;
use registry::{RegistryResult, TypeRegistry};
use tracing::debug;

use crate::names::generate_name;
use crate::workflow::TEST_TASK_IDS;

pub type ServiceBuilder = fn(EntityName) -> ServiceRequest;
pub type EntityBuilder = fn(FullyQualifiedEntityName, EntityName) -> EntityRequest;

pub const ORCHESTRATOR_HOST_PORT: &str = "http://localhost:8080";
pub const DATABASE_HOST_PORT: &str = "http://localhost:1234";
pub const DATABASE_USERNAME: &str = "username";
pub const DATABASE_PASSWORD: &str = "password";

pub static SERVICE_REGISTRY: Lazy<TypeRegistry<ServiceKind, ServiceBuilder>> =
    Lazy::new(|| {
        TypeRegistry::new("service")
            .with(ServiceKind::Pipeline, pipeline_service as ServiceBuilder)
            .with(ServiceKind::Database, database_service as ServiceBuilder)
    });

pub static ENTITY_REGISTRY: Lazy<TypeRegistry<EntityKind, EntityBuilder>> = Lazy::new(|| {
    TypeRegistry::new("entity")
        .with(EntityKind::Pipeline, pipeline as EntityBuilder)
        .with(EntityKind::Database, database as EntityBuilder)
        .with(EntityKind::DatabaseSchema, database_schema as EntityBuilder)
        .with(EntityKind::Table, table as EntityBuilder)
});

/// Default create request for a service of `kind`, named `name` or a fresh
/// random name.
#[track_caller]
pub fn get_create_service(kind: ServiceKind, name: Option<EntityName>) -> RegistryResult<ServiceRequest> {
    let build = SERVICE_REGISTRY.lookup(kind)?;
    let name = name.unwrap_or_else(generate_name);
    debug!(%kind, %name, "building service request");
    Ok(build(name))
}

/// Default create request for a data entity of `kind` placed under
/// `reference`, named `name` or a fresh random name.
///
/// `reference` must already name the right kind of parent (see
/// [`EntityKind::parent`]); it is passed through unchecked.
#[track_caller]
pub fn get_create_entity(
    kind: EntityKind,
    reference: FullyQualifiedEntityName,
    name: Option<EntityName>,
) -> RegistryResult<EntityRequest> {
    let build = ENTITY_REGISTRY.lookup(kind)?;
    let name = name.unwrap_or_else(generate_name);
    debug!(%kind, %name, parent = %reference, "building entity request");
    Ok(build(reference, name))
}

/* ---------- services ---------- */

fn pipeline_service(name: EntityName) -> ServiceRequest {
    ServiceRequest::Pipeline(CreatePipelineServiceRequest {
        name,
        display_name: None,
        description: None,
        service_type: PipelineServiceType::Airflow,
        connection: PipelineConnection {
            config: AirflowConnection::new(
                ORCHESTRATOR_HOST_PORT,
                AirflowMetadataConnection::Backend,
            ),
        },
    })
}

fn database_service(name: EntityName) -> ServiceRequest {
    ServiceRequest::Database(CreateDatabaseServiceRequest {
        name,
        display_name: None,
        description: None,
        service_type: DatabaseServiceType::Mysql,
        connection: DatabaseConnection {
            config: MysqlConnection::new(DATABASE_USERNAME, DATABASE_PASSWORD, DATABASE_HOST_PORT),
        },
    })
}

/* ---------- data entities ---------- */

// task1 -> task2 -> {task3, task4}; `downstreamTasks` lists the tasks each one waits on
fn pipeline(service: FullyQualifiedEntityName, name: EntityName) -> EntityRequest {
    let [first, second, third, fourth] = TEST_TASK_IDS;
    EntityRequest::Pipeline(CreatePipelineRequest {
        name,
        description: None,
        service,
        tasks: vec![
            Task::new(first),
            Task::new(second).with_downstream([first]),
            Task::new(third).with_downstream([second]),
            Task::new(fourth).with_downstream([second]),
        ],
    })
}

fn database(service: FullyQualifiedEntityName, name: EntityName) -> EntityRequest {
    EntityRequest::Database(CreateDatabaseRequest {
        name,
        description: None,
        service,
    })
}

fn database_schema(database: FullyQualifiedEntityName, name: EntityName) -> EntityRequest {
    EntityRequest::DatabaseSchema(CreateDatabaseSchemaRequest {
        name,
        description: None,
        database,
    })
}

fn table(database_schema: FullyQualifiedEntityName, name: EntityName) -> EntityRequest {
    EntityRequest::Table(CreateTableRequest {
        name,
        description: None,
        database_schema,
        columns: vec![
            Column::new("id", DataType::Bigint),
            Column::new("another", DataType::Bigint),
            Column::new("struct", DataType::Struct).with_children(vec![
                Column::new("id", DataType::Int),
                Column::new("name", DataType::String),
            ]),
        ],
    })
}
