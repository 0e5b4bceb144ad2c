// src/errors.rs

//! Crate-wide error types.
//!
//! [`SchedulingError`] is what the engine returns for well-typed input whose
//! dependency structure cannot be ordered. [`TaskOrderError`] wraps it together
//! with everything that can go wrong around the engine: reading task files,
//! parsing them, validating individual tasks, timeouts.

use thiserror::Error;

use crate::model::TaskTitle;

/// Domain errors produced by the scheduler engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("duplicate task title '{0}'")]
    DuplicateTitle(TaskTitle),

    #[error("task '{task}' depends on unknown task '{missing}'")]
    UnknownDependency { task: TaskTitle, missing: TaskTitle },

    /// `cycle` lists the tasks that sit on a dependency cycle; `blocked` lists
    /// the other unscheduled tasks, which only depend on a cycle.
    #[error("cyclic dependency between tasks {cycle:?}")]
    CyclicDependency {
        cycle: Vec<TaskTitle>,
        blocked: Vec<TaskTitle>,
    },
}

impl SchedulingError {
    /// Stable, machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            SchedulingError::DuplicateTitle(_) => "duplicate_title",
            SchedulingError::UnknownDependency { .. } => "unknown_dependency",
            SchedulingError::CyclicDependency { .. } => "cyclic_dependency",
        }
    }

    /// Titles a caller should highlight when rendering this error.
    pub fn titles(&self) -> Vec<TaskTitle> {
        match self {
            SchedulingError::DuplicateTitle(title) => vec![title.clone()],
            SchedulingError::UnknownDependency { task, missing } => {
                vec![task.clone(), missing.clone()]
            }
            SchedulingError::CyclicDependency { cycle, .. } => cycle.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum TaskOrderError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid task: {0}")]
    InvalidTask(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Scheduling error: {0}")]
    Scheduling(#[from] SchedulingError),

    #[error("scheduling did not finish within {0} ms")]
    Timeout(u64),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TaskOrderError {
    /// Prefix an `InvalidTask` message with the task it refers to.
    pub(crate) fn in_task(self, title: &str) -> Self {
        match self {
            TaskOrderError::InvalidTask(msg) => {
                TaskOrderError::InvalidTask(format!("task '{title}': {msg}"))
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskOrderError>;
