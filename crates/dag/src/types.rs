use crate::error::DagError;
use chrono::NaiveDate;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Edge weight for a graph whose edges carry no data of their own.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyEdge;

pub type DagResult<T> = Result<T, DagError>;

/// One schedulable unit of an orchestrated workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTask {
    pub id: String,
    /// Shell command the orchestrator runs for this task.
    pub command: String,
}

impl WorkflowTask {
    pub fn shell(id: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            command: command.into(),
        }
    }
}

impl Display for WorkflowTask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Graph definition as handed to the orchestration engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    pub name: String,
    pub start_date: NaiveDate,
    pub tasks: Vec<WorkflowTask>,
    pub edges: Vec<(String, String)>,
}

pub enum TransitiveDirection {
    Upstream,
    Downstream,
}

impl From<TransitiveDirection> for Direction {
    fn from(value: TransitiveDirection) -> Self {
        match value {
            TransitiveDirection::Upstream => Direction::Incoming,
            TransitiveDirection::Downstream => Direction::Outgoing,
        }
    }
}
