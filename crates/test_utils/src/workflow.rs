use chrono::NaiveDate;
use dag::types::{DagResult, WorkflowTask};
use dag::WorkflowDag;

/// Task ids of both the pipeline fixture in [`crate::factory`] and
/// [`get_test_dag`].
pub const TEST_TASK_IDS: [&str; 4] = ["task1", "task2", "task3", "task4"];
pub const TEST_TASK_COMMAND: &str = "date";

pub fn test_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default()
}

/// Orchestration graph with the same topology as the pipeline fixture:
/// `task1 >> task2 >> [task3, task4]`.
pub fn get_test_dag(name: &str) -> DagResult<WorkflowDag> {
    let mut dag = WorkflowDag::new(name, test_start_date());
    for id in TEST_TASK_IDS {
        dag.add_task(WorkflowTask::shell(id, TEST_TASK_COMMAND))?;
    }

    let [first, second, third, fourth] = TEST_TASK_IDS;
    dag.add_dependency(first, second)?;
    dag.fan_out(second, &[third, fourth])?;

    Ok(dag)
}
