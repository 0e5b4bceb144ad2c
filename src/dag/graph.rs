// src/dag/graph.rs

use std::collections::HashMap;

use tracing::debug;

use crate::errors::SchedulingError;
use crate::model::Task;

/// Internal node structure: stores immediate deps and dependents as indices
/// into the borrowed task slice.
#[derive(Debug, Clone, Default)]
struct GraphNode {
    /// Tasks that must be ordered before this one.
    deps: Vec<usize>,
    /// Tasks that list this one as a dependency.
    dependents: Vec<usize>,
}

/// Dependency graph over one schedule request.
///
/// Built fresh per call and never mutated afterwards. Edges point from a task
/// to the tasks it depends on, as in the data model; `dependents_of` gives the
/// reverse direction the ordering pass walks.
#[derive(Debug, Clone)]
pub struct TaskGraph<'a> {
    tasks: &'a [Task],
    index: HashMap<&'a str, usize>,
    nodes: Vec<GraphNode>,
}

impl<'a> TaskGraph<'a> {
    /// Validate titles and references, then build adjacency lists.
    ///
    /// Fails with:
    /// - [`SchedulingError::DuplicateTitle`] for the first title seen twice,
    ///   before any edge is looked at;
    /// - [`SchedulingError::UnknownDependency`] for the first reference (in
    ///   input order, then title order) that names no task.
    ///
    /// Self-dependencies are kept as self-loops so the ordering pass reports
    /// them as one-node cycles.
    pub fn build(tasks: &'a [Task]) -> Result<Self, SchedulingError> {
        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(tasks.len());

        for (i, task) in tasks.iter().enumerate() {
            if index.insert(task.title.as_str(), i).is_some() {
                return Err(SchedulingError::DuplicateTitle(task.title.clone()));
            }
        }

        let mut nodes = vec![GraphNode::default(); tasks.len()];

        for (i, task) in tasks.iter().enumerate() {
            for dep in task.dependencies.iter() {
                let Some(&j) = index.get(dep) else {
                    return Err(SchedulingError::UnknownDependency {
                        task: task.title.clone(),
                        missing: dep.to_string(),
                    });
                };
                nodes[i].deps.push(j);
                nodes[j].dependents.push(i);
            }
        }

        debug!(
            tasks = tasks.len(),
            edges = nodes.iter().map(|n| n.deps.len()).sum::<usize>(),
            "built dependency graph"
        );

        Ok(Self {
            tasks,
            index,
            nodes,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, idx: usize) -> &'a Task {
        &self.tasks[idx]
    }

    pub fn title(&self, idx: usize) -> &'a str {
        self.tasks[idx].title.as_str()
    }

    /// Number of dependencies a task has (its in-degree before ordering).
    pub fn in_degree(&self, title: &str) -> Option<usize> {
        self.index.get(title).map(|&i| self.nodes[i].deps.len())
    }

    /// Immediate dependencies of a task, in title order.
    pub fn dependencies_of(&self, title: &str) -> Vec<&'a str> {
        self.index
            .get(title)
            .map(|&i| self.nodes[i].deps.iter().map(|&d| self.title(d)).collect())
            .unwrap_or_default()
    }

    /// Immediate dependents of a task, in input order.
    pub fn dependents_of(&self, title: &str) -> Vec<&'a str> {
        self.index
            .get(title)
            .map(|&i| {
                self.nodes[i]
                    .dependents
                    .iter()
                    .map(|&d| self.title(d))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Titles of tasks with no dependencies, sorted.
    pub fn roots(&self) -> Vec<&'a str> {
        let mut roots: Vec<&'a str> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.deps.is_empty())
            .map(|(i, _)| self.title(i))
            .collect();
        roots.sort_unstable();
        roots
    }

    pub(crate) fn dep_indices(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].deps
    }

    pub(crate) fn dependent_indices(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].dependents
    }
}
