use crate::kinds::{EntityKind, ServiceKind};
use crate::models::*;
use common::types::{EntityName, FullyQualifiedEntityName, NameError};
use serde::Serialize;

/// A payload the catalog accepts on one of its create-or-update endpoints.
pub trait CreateRequest: Serialize + Send + Sync {
    /// Path below `/v1/` the request is sent to.
    fn endpoint(&self) -> &'static str;
    fn name(&self) -> &EntityName;
}

macro_rules! impl_create_request {
    ($($ty:ty => $endpoint:literal),+ $(,)?) => {
        $(
            impl CreateRequest for $ty {
                fn endpoint(&self) -> &'static str {
                    $endpoint
                }
                fn name(&self) -> &EntityName {
                    &self.name
                }
            }
        )+
    };
}

impl_create_request! {
    CreatePipelineServiceRequest => "services/pipelineServices",
    CreateDatabaseServiceRequest => "services/databaseServices",
    CreateDatabaseRequest => "databases",
    CreateDatabaseSchemaRequest => "databaseSchemas",
    CreateTableRequest => "tables",
    CreatePipelineRequest => "pipelines",
    CreateUserRequest => "users",
    CreateTeamRequest => "teams",
    CreateTestDefinitionRequest => "dataQuality/testDefinitions",
    CreateTestSuiteRequest => "dataQuality/testSuites/executable",
    CreateTestCaseRequest => "dataQuality/testCases",
}

/// Default create request for any service kind with a registered builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ServiceRequest {
    Pipeline(CreatePipelineServiceRequest),
    Database(CreateDatabaseServiceRequest),
}

impl ServiceRequest {
    pub fn kind(&self) -> ServiceKind {
        match self {
            Self::Pipeline(_) => ServiceKind::Pipeline,
            Self::Database(_) => ServiceKind::Database,
        }
    }

    pub fn name(&self) -> &EntityName {
        CreateRequest::name(self)
    }

    /// Services sit at the root of the containment chain, so their FQN is
    /// just their name.
    #[track_caller]
    pub fn fully_qualified_name(&self) -> Result<FullyQualifiedEntityName, NameError> {
        FullyQualifiedEntityName::try_from(CreateRequest::name(self))
    }

    pub fn as_pipeline(&self) -> Option<&CreatePipelineServiceRequest> {
        match self {
            Self::Pipeline(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_database(&self) -> Option<&CreateDatabaseServiceRequest> {
        match self {
            Self::Database(r) => Some(r),
            _ => None,
        }
    }
}

impl CreateRequest for ServiceRequest {
    fn endpoint(&self) -> &'static str {
        match self {
            Self::Pipeline(r) => r.endpoint(),
            Self::Database(r) => r.endpoint(),
        }
    }

    fn name(&self) -> &EntityName {
        match self {
            Self::Pipeline(r) => &r.name,
            Self::Database(r) => &r.name,
        }
    }
}

/// Default create request for any data-entity kind with a registered builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntityRequest {
    Pipeline(CreatePipelineRequest),
    Database(CreateDatabaseRequest),
    DatabaseSchema(CreateDatabaseSchemaRequest),
    Table(CreateTableRequest),
}

impl EntityRequest {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Pipeline(_) => EntityKind::Pipeline,
            Self::Database(_) => EntityKind::Database,
            Self::DatabaseSchema(_) => EntityKind::DatabaseSchema,
            Self::Table(_) => EntityKind::Table,
        }
    }

    pub fn name(&self) -> &EntityName {
        CreateRequest::name(self)
    }

    /// Reference to the parent this request was built under.
    pub fn parent(&self) -> &FullyQualifiedEntityName {
        match self {
            Self::Pipeline(r) => &r.service,
            Self::Database(r) => &r.service,
            Self::DatabaseSchema(r) => &r.database,
            Self::Table(r) => &r.database_schema,
        }
    }

    /// FQN the created entity will have: the parent's FQN plus this name.
    /// Feed it straight into the next builder down the containment chain.
    #[track_caller]
    pub fn fully_qualified_name(&self) -> Result<FullyQualifiedEntityName, NameError> {
        self.parent().child(CreateRequest::name(self))
    }

    pub fn as_pipeline(&self) -> Option<&CreatePipelineRequest> {
        match self {
            Self::Pipeline(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_database(&self) -> Option<&CreateDatabaseRequest> {
        match self {
            Self::Database(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_database_schema(&self) -> Option<&CreateDatabaseSchemaRequest> {
        match self {
            Self::DatabaseSchema(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&CreateTableRequest> {
        match self {
            Self::Table(r) => Some(r),
            _ => None,
        }
    }
}

impl CreateRequest for EntityRequest {
    fn endpoint(&self) -> &'static str {
        match self {
            Self::Pipeline(r) => r.endpoint(),
            Self::Database(r) => r.endpoint(),
            Self::DatabaseSchema(r) => r.endpoint(),
            Self::Table(r) => r.endpoint(),
        }
    }

    fn name(&self) -> &EntityName {
        match self {
            Self::Pipeline(r) => &r.name,
            Self::Database(r) => &r.name,
            Self::DatabaseSchema(r) => &r.name,
            Self::Table(r) => &r.name,
        }
    }
}
