use std::fmt;
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq)]
pub enum DagError {
    DuplicateNode(String),
    TaskNotFound(String),
    CycleDetected(Vec<String>),
}

impl Display for DagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DagError::CycleDetected(r) => {
                write!(f, "Found cyclic dependencies in workflow for:")?;
                for t in r {
                    write!(f, "\n - {}", t)?;
                }
                Ok(())
            }
            DagError::DuplicateNode(r) => {
                write!(f, "Found duplicated declaration of task: {r:?}")
            }
            DagError::TaskNotFound(r) => write!(f, "Task {r} not found!"),
        }
    }
}

impl std::error::Error for DagError {}
