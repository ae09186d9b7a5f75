mod error;
pub mod types;

pub use crate::error::DagError;
use crate::types::{DagResult, EmptyEdge, TransitiveDirection, WorkflowDefinition, WorkflowTask};
use catalog::CreatePipelineRequest;
use chrono::NaiveDate;
use log::{debug, info};
use petgraph::algo::{kosaraju_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::prelude::EdgeRef;
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::path::Path;

/// Execution graph of an orchestrated workflow.
///
/// Nodes are [`WorkflowTask`]s, an edge `a -> b` means `a` must finish
/// before `b` starts. Tasks are addressed by their string id; `id_to_index`
/// keeps the lookup from id to graph node.
///
/// # Example
///
/// ```ignore
/// let mut dag = WorkflowDag::new("ingest", start);
/// dag.add_task(WorkflowTask::shell("extract", "date"))?;
/// dag.add_task(WorkflowTask::shell("load", "date"))?;
/// dag.add_dependency("extract", "load")?;
/// ```
#[derive(Debug)]
pub struct WorkflowDag {
    pub name: String,
    pub start_date: NaiveDate,
    pub graph: DiGraph<WorkflowTask, EmptyEdge>,
    pub id_to_index: HashMap<String, NodeIndex>,
}

impl WorkflowDag {
    pub fn new(name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start_date,
            graph: DiGraph::new(),
            id_to_index: HashMap::new(),
        }
    }

    /// Mirror a catalog pipeline: one task per pipeline task, all running
    /// `command`, wired by the pipeline's task dependencies.
    pub fn from_pipeline(
        pipeline: &CreatePipelineRequest,
        start_date: NaiveDate,
        command: &str,
    ) -> DagResult<Self> {
        let mut dag = Self::new(pipeline.name.as_str(), start_date);
        for task in &pipeline.tasks {
            dag.add_task(WorkflowTask::shell(task.name.clone(), command))?;
        }
        for (upstream, downstream) in pipeline.task_edges() {
            dag.add_dependency(&upstream, &downstream)?;
        }
        info!(
            "built workflow {} from pipeline with {} tasks",
            dag.name,
            dag.graph.node_count()
        );
        Ok(dag)
    }

    pub fn add_task(&mut self, task: WorkflowTask) -> DagResult<NodeIndex> {
        if self.id_to_index.contains_key(&task.id) {
            return Err(DagError::DuplicateNode(task.id));
        }
        debug!("adding task {} running `{}`", task, task.command);
        let id = task.id.clone();
        let idx = self.graph.add_node(task);
        self.id_to_index.insert(id, idx);
        Ok(idx)
    }

    /// Make `downstream` wait for `upstream`. Adding the same dependency
    /// twice leaves a single edge.
    pub fn add_dependency(&mut self, upstream: &str, downstream: &str) -> DagResult<()> {
        let from = self.require_index(upstream)?;
        let to = self.require_index(downstream)?;
        debug!("{} >> {}", upstream, downstream);
        self.graph.update_edge(from, to, EmptyEdge);
        Ok(())
    }

    /// `upstream >> [downstreams...]`
    pub fn fan_out(&mut self, upstream: &str, downstreams: &[&str]) -> DagResult<()> {
        for downstream in downstreams {
            self.add_dependency(upstream, downstream)?;
        }
        Ok(())
    }

    fn require_index(&self, id: &str) -> DagResult<NodeIndex> {
        self.get_index(id)
            .ok_or_else(|| DagError::TaskNotFound(id.to_string()))
    }

    pub fn get(&self, id: &str) -> Option<&WorkflowTask> {
        self.id_to_index.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn get_index(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_index.get(id).copied()
    }

    pub fn task_ids(&self) -> BTreeSet<String> {
        self.id_to_index.keys().cloned().collect()
    }

    /// All dependencies as `(upstream, downstream)` id pairs.
    pub fn edges(&self) -> BTreeSet<(String, String)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].id.clone(),
                    self.graph[e.target()].id.clone(),
                )
            })
            .collect()
    }

    /// Direct upstream tasks of `id`.
    pub fn upstream_of(&self, id: &str) -> DagResult<BTreeSet<String>> {
        let idx = self.require_index(id)?;
        Ok(self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.graph[n].id.clone())
            .collect())
    }

    pub fn toposort(&self) -> DagResult<Vec<&WorkflowTask>> {
        let order = toposort(&self.graph, None).map_err(|_| {
            let cyclic = kosaraju_scc(&self.graph)
                .into_iter()
                .find(|scc| scc.len() > 1)
                .unwrap_or_default();

            let mut cycle: Vec<String> = cyclic
                .into_iter()
                .map(|idx| self.graph[idx].id.clone())
                .collect();
            cycle.sort();
            DagError::CycleDetected(cycle)
        })?;

        Ok(order.into_iter().map(|idx| &self.graph[idx]).collect())
    }

    /// Every task reachable from `id` in the given direction, `id` excluded.
    pub fn transitive(&self, id: &str, direction: TransitiveDirection) -> DagResult<BTreeSet<String>> {
        let start = self.require_index(id)?;
        let direction: Direction = direction.into();
        let mut visited = BTreeSet::new();
        let mut stack = VecDeque::from([start]);

        while let Some(current) = stack.pop_back() {
            for next in self.graph.neighbors_directed(current, direction) {
                if visited.insert(next) {
                    stack.push_back(next);
                }
            }
        }

        Ok(visited
            .into_iter()
            .map(|idx| self.graph[idx].id.clone())
            .collect())
    }

    /// Definition for the orchestration engine, tasks in execution order.
    pub fn to_definition(&self) -> DagResult<WorkflowDefinition> {
        let tasks = self.toposort()?.into_iter().cloned().collect();
        Ok(WorkflowDefinition {
            name: self.name.clone(),
            start_date: self.start_date,
            tasks,
            edges: self.edges().into_iter().collect(),
        })
    }

    /// DOT rendering, left to right, labelled by task id.
    pub fn to_dot_string(&self) -> String {
        use std::fmt::Write;

        let mut dot = String::new();
        let _ = writeln!(dot, "digraph \"{}\" {{", self.name);
        let _ = writeln!(dot, "    rankdir=LR;");

        for idx in self.graph.node_indices() {
            let task = &self.graph[idx];
            let _ = writeln!(dot, "    {} [label=\"{}\"];", idx.index(), task.id);
        }

        for edge in self.graph.edge_references() {
            let _ = writeln!(
                dot,
                "    {} -> {};",
                edge.source().index(),
                edge.target().index(),
            );
        }
        let _ = writeln!(dot, "}}");

        dot
    }

    pub fn export_dot_to<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.to_dot_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Task;

    fn pipeline(tasks: Vec<Task>) -> CreatePipelineRequest {
        CreatePipelineRequest {
            name: "etl".into(),
            description: None,
            service: "airflow".into(),
            tasks,
        }
    }

    fn init_logging() {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init()
            .ok();
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date")
    }

    fn diamond() -> DagResult<WorkflowDag> {
        let mut dag = WorkflowDag::new("diamond", start());
        for id in ["a", "b", "c", "d"] {
            dag.add_task(WorkflowTask::shell(id, "true"))?;
        }
        dag.add_dependency("a", "b")?;
        dag.add_dependency("a", "c")?;
        dag.fan_out("b", &["d"])?;
        dag.fan_out("c", &["d"])?;
        Ok(dag)
    }

    #[test]
    fn toposort_respects_dependencies() -> Result<(), DagError> {
        init_logging();
        let dag = diamond()?;
        let order: Vec<&str> = dag.toposort()?.iter().map(|t| t.id.as_str()).collect();
        let pos = |id: &str| order.iter().position(|o| *o == id).unwrap();

        assert_eq!(order.len(), 4);
        assert!(pos("a") < pos("b"));
        assert!(pos("a") < pos("c"));
        assert!(pos("b") < pos("d"));
        assert!(pos("c") < pos("d"));
        Ok(())
    }

    #[test]
    fn duplicate_task_rejected() -> Result<(), DagError> {
        let mut dag = diamond()?;
        let err = dag.add_task(WorkflowTask::shell("a", "true")).unwrap_err();
        assert_eq!(err, DagError::DuplicateNode("a".to_string()));
        Ok(())
    }

    #[test]
    fn unknown_task_rejected() -> Result<(), DagError> {
        let mut dag = diamond()?;
        let err = dag.add_dependency("a", "zzz").unwrap_err();
        assert_eq!(err, DagError::TaskNotFound("zzz".to_string()));
        Ok(())
    }

    #[test]
    fn repeated_dependency_is_single_edge() -> Result<(), DagError> {
        let mut dag = diamond()?;
        dag.add_dependency("a", "b")?;
        assert_eq!(dag.graph.edge_count(), 4);
        Ok(())
    }

    #[test]
    fn cycle_is_reported() -> Result<(), DagError> {
        let mut dag = diamond()?;
        dag.add_dependency("d", "a")?;
        match dag.toposort() {
            Err(DagError::CycleDetected(tasks)) => {
                assert_eq!(tasks, vec!["a", "b", "c", "d"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn transitive_walks_both_ways() -> Result<(), DagError> {
        let dag = diamond()?;
        let down = dag.transitive("a", TransitiveDirection::Downstream)?;
        assert_eq!(
            down,
            BTreeSet::from(["b".to_string(), "c".to_string(), "d".to_string()])
        );
        let up = dag.transitive("d", TransitiveDirection::Upstream)?;
        assert_eq!(
            up,
            BTreeSet::from(["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(
            dag.upstream_of("d")?,
            BTreeSet::from(["b".to_string(), "c".to_string()])
        );
        Ok(())
    }

    #[test]
    fn from_pipeline_mirrors_task_edges() -> Result<(), DagError> {
        let pipe = pipeline(vec![
            Task::new("extract"),
            Task::new("load").with_downstream(["extract"]),
        ]);
        let dag = WorkflowDag::from_pipeline(&pipe, start(), "date")?;

        assert_eq!(dag.name, "etl");
        assert_eq!(dag.task_ids(), pipe.task_names());
        assert_eq!(dag.edges(), pipe.task_edges());
        assert_eq!(dag.get("load").map(|t| t.command.as_str()), Some("date"));
        Ok(())
    }

    #[test]
    fn from_pipeline_with_dangling_dependency_fails() {
        let pipe = pipeline(vec![Task::new("load").with_downstream(["missing"])]);
        let err = WorkflowDag::from_pipeline(&pipe, start(), "date").unwrap_err();
        assert_eq!(err, DagError::TaskNotFound("missing".to_string()));
    }

    #[test]
    fn definition_serializes_for_orchestrator() -> Result<(), DagError> {
        let dag = diamond()?;
        let def = dag.to_definition()?;
        assert_eq!(def.tasks.first().map(|t| t.id.as_str()), Some("a"));
        assert_eq!(def.edges.len(), 4);

        let value = serde_json::to_value(&def).expect("serialize definition");
        assert_eq!(value["startDate"], "2021-01-01");
        assert_eq!(value["edges"][0], serde_json::json!(["a", "b"]));
        Ok(())
    }

    #[test]
    fn dot_output_lists_nodes_and_edges() -> Result<(), DagError> {
        let dag = diamond()?;
        let dot = dag.to_dot_string();
        assert!(dot.starts_with("digraph \"diamond\" {"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("[label=\"d\"]"));
        assert_eq!(dot.matches("->").count(), 4);
        Ok(())
    }

    #[test]
    fn dot_export_writes_file() -> Result<(), Box<dyn std::error::Error>> {
        let dag = diamond()?;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("diamond.dot");

        dag.export_dot_to(&path)?;
        assert_eq!(std::fs::read_to_string(&path)?, dag.to_dot_string());
        Ok(())
    }
}
