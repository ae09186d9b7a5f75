use catalog::{CreateRequest, DataType, EntityKind, ServiceKind};
use common::types::{EntityName, FullyQualifiedEntityName};
use proptest::prelude::*;
use registry::RegistryError;
use std::collections::{BTreeSet, HashSet};
use test_utils::factory::{ENTITY_REGISTRY, SERVICE_REGISTRY};
use test_utils::workflow::TEST_TASK_IDS;
use test_utils::{get_create_entity, get_create_service};

fn fqn(s: &str) -> FullyQualifiedEntityName {
    FullyQualifiedEntityName::from(s)
}

fn expected_task_edges() -> BTreeSet<(String, String)> {
    [("task1", "task2"), ("task2", "task3"), ("task2", "task4")]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

#[test]
fn registries_hold_expected_kinds() {
    assert_eq!(
        SERVICE_REGISTRY.kinds(),
        vec![ServiceKind::Database, ServiceKind::Pipeline]
    );
    assert_eq!(
        ENTITY_REGISTRY.kinds(),
        vec![
            EntityKind::Database,
            EntityKind::DatabaseSchema,
            EntityKind::Table,
            EntityKind::Pipeline
        ]
    );
}

#[test]
fn pipeline_service_defaults() -> Result<(), RegistryError> {
    let req = get_create_service(ServiceKind::Pipeline, Some(EntityName::from("airflow")))?;
    assert_eq!(req.kind(), ServiceKind::Pipeline);
    assert_eq!(req.name().as_str(), "airflow");

    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value["serviceType"], "Airflow");
    assert_eq!(value["connection"]["config"]["hostPort"], "http://localhost:8080");
    assert_eq!(value["connection"]["config"]["connection"]["type"], "Backend");
    Ok(())
}

#[test]
fn database_service_defaults() -> Result<(), RegistryError> {
    let req = get_create_service(ServiceKind::Database, None)?;
    let db = req.as_database().expect("database service");
    let config = &db.connection.config;

    assert_eq!(config.username, "username");
    assert_eq!(config.auth_type.password, "password");
    assert_eq!(config.host_port, "http://localhost:1234");
    assert_eq!(req.endpoint(), "services/databaseServices");
    Ok(())
}

#[test]
fn unregistered_service_kind_fails() {
    let err = get_create_service(ServiceKind::Dashboard, None).unwrap_err();
    assert_eq!(err.kind(), "DashboardService");
    assert!(err.to_string().contains("Register a builder"));
}

#[test]
fn unregistered_entity_kind_fails_without_falling_through() {
    // Topic has no entity builder; the service registry is never consulted
    let err = get_create_entity(EntityKind::Topic, fqn("kafka"), None).unwrap_err();
    let RegistryError::UnregisteredType { kind, registry, .. } = err;
    assert_eq!(kind, "Topic");
    assert_eq!(registry, "entity");
}

#[test]
fn generated_names_differ() -> Result<(), RegistryError> {
    let a = get_create_service(ServiceKind::Database, None)?;
    let b = get_create_service(ServiceKind::Database, None)?;
    assert_ne!(a.name(), b.name());

    let names: HashSet<EntityName> = (0..1000)
        .map(|_| get_create_entity(EntityKind::Database, fqn("svc"), None).map(|r| r.name().clone()))
        .collect::<Result<_, _>>()?;
    assert_eq!(names.len(), 1000);
    Ok(())
}

#[test]
fn pipeline_fixture_shape() -> Result<(), RegistryError> {
    let req = get_create_entity(EntityKind::Pipeline, fqn("airflow"), None)?;
    let pipeline = req.as_pipeline().expect("pipeline request");

    assert_eq!(pipeline.service, fqn("airflow"));
    assert_eq!(pipeline.tasks.len(), 4);
    assert_eq!(
        pipeline.task_names(),
        TEST_TASK_IDS.iter().map(|id| id.to_string()).collect::<BTreeSet<_>>()
    );
    let deps = |name: &str| pipeline.task(name).map(|t| t.downstream_tasks.clone());
    assert_eq!(deps("task1"), Some(vec![]));
    assert_eq!(deps("task2"), Some(vec!["task1".to_string()]));
    assert_eq!(deps("task3"), Some(vec!["task2".to_string()]));
    assert_eq!(deps("task4"), Some(vec!["task2".to_string()]));
    Ok(())
}

#[test]
fn table_fixture_columns() -> Result<(), RegistryError> {
    let req = get_create_entity(EntityKind::Table, fqn("svc.db.schema"), Some("t".into()))?;
    let table = req.as_table().expect("table request");

    assert_eq!(table.column_names(), vec!["id", "another", "struct"]);
    assert_eq!(table.columns[0].data_type, DataType::Bigint);
    assert_eq!(table.columns[1].data_type, DataType::Bigint);

    let nested = table.column("struct").expect("struct column");
    assert_eq!(nested.data_type, DataType::Struct);
    assert_eq!(nested.children.len(), 2);
    assert_eq!(nested.children[0].name, "id");
    assert_eq!(nested.children[0].data_type, DataType::Int);
    assert_eq!(nested.children[1].name, "name");
    assert_eq!(nested.children[1].data_type, DataType::String);

    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value["databaseSchema"], "svc.db.schema");
    Ok(())
}

#[test]
fn containment_chain_composes() -> Result<(), Box<dyn std::error::Error>> {
    let service = get_create_service(ServiceKind::Database, Some("mysql_svc".into()))?;
    let service_ref = service.fully_qualified_name()?;

    let db = get_create_entity(EntityKind::Database, service_ref.clone(), Some("db1".into()))?;
    let db_req = db.as_database().expect("database request");
    assert_eq!(db_req.name.as_str(), "db1");
    assert_eq!(db_req.service, service_ref);

    let schema = get_create_entity(
        EntityKind::DatabaseSchema,
        db.fully_qualified_name()?,
        Some("schema1".into()),
    )?;
    let schema_req = schema.as_database_schema().expect("schema request");
    assert_eq!(schema_req.name.as_str(), "schema1");
    assert_eq!(schema_req.database.as_str(), "mysql_svc.db1");

    let table = get_create_entity(EntityKind::Table, schema.fully_qualified_name()?, None)?;
    assert_eq!(
        table.as_table().map(|t| t.database_schema.as_str()),
        Some("mysql_svc.db1.schema1")
    );
    Ok(())
}

#[test]
fn containment_chain_quotes_dotted_names() -> Result<(), Box<dyn std::error::Error>> {
    let db = get_create_entity(EntityKind::Database, fqn("svc"), Some("sales.eu".into()))?;
    let schema_parent = db.fully_qualified_name()?;
    assert_eq!(schema_parent.as_str(), "svc.\"sales.eu\"");
    assert_eq!(schema_parent.parts(), vec!["svc", "sales.eu"]);

    let bad = get_create_entity(EntityKind::Database, fqn("svc"), Some("a\"b".into()))?;
    assert!(bad.fully_qualified_name().is_err());
    Ok(())
}

proptest! {
    #[test]
    fn pipeline_fixture_holds_for_any_name(name in "[a-zA-Z0-9_.-]{1,40}", service in "[a-z0-9_]{1,20}") {
        let req = get_create_entity(EntityKind::Pipeline, fqn(&service), Some(name.as_str().into()))
            .expect("pipeline builder registered");
        let pipeline = req.as_pipeline().expect("pipeline request");

        prop_assert_eq!(pipeline.name.as_str(), name.as_str());
        prop_assert_eq!(pipeline.service.as_str(), service.as_str());
        prop_assert_eq!(pipeline.tasks.len(), 4);
        prop_assert_eq!(pipeline.task_edges(), expected_task_edges());
    }
}
