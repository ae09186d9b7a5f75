use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kinds of service a catalog can hold. Only some have fixture builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceKind {
    Database,
    Pipeline,
    Dashboard,
    Messaging,
    MlModel,
    Storage,
    Search,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 7] = [
        Self::Database,
        Self::Pipeline,
        Self::Dashboard,
        Self::Messaging,
        Self::MlModel,
        Self::Storage,
        Self::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "DatabaseService",
            Self::Pipeline => "PipelineService",
            Self::Dashboard => "DashboardService",
            Self::Messaging => "MessagingService",
            Self::MlModel => "MlModelService",
            Self::Storage => "StorageService",
            Self::Search => "SearchService",
        }
    }
}

impl Display for ServiceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kinds of data asset, each owned by a parent in the containment chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Database,
    DatabaseSchema,
    Table,
    Pipeline,
    Topic,
    Dashboard,
    Container,
    MlModel,
    StoredProcedure,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        Self::Database,
        Self::DatabaseSchema,
        Self::Table,
        Self::Pipeline,
        Self::Topic,
        Self::Dashboard,
        Self::Container,
        Self::MlModel,
        Self::StoredProcedure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "Database",
            Self::DatabaseSchema => "DatabaseSchema",
            Self::Table => "Table",
            Self::Pipeline => "Pipeline",
            Self::Topic => "Topic",
            Self::Dashboard => "Dashboard",
            Self::Container => "Container",
            Self::MlModel => "MlModel",
            Self::StoredProcedure => "StoredProcedure",
        }
    }

    /// Kind of the entity (or service) a reference passed to this kind's
    /// builder is expected to name.
    pub fn parent(&self) -> ParentKind {
        match self {
            Self::Database => ParentKind::Service(ServiceKind::Database),
            Self::DatabaseSchema => ParentKind::Entity(EntityKind::Database),
            Self::Table | Self::StoredProcedure => ParentKind::Entity(EntityKind::DatabaseSchema),
            Self::Pipeline => ParentKind::Service(ServiceKind::Pipeline),
            Self::Topic => ParentKind::Service(ServiceKind::Messaging),
            Self::Dashboard => ParentKind::Service(ServiceKind::Dashboard),
            Self::Container => ParentKind::Service(ServiceKind::Storage),
            Self::MlModel => ParentKind::Service(ServiceKind::MlModel),
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    Service(ServiceKind),
    Entity(EntityKind),
}
