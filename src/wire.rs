// src/wire.rs

//! JSON request/response bodies of the scheduling service.
//!
//! ```json
//! { "tasks": [ { "title": "A", "estimatedHours": 2, "dueDate": "2024-01-10", "dependencies": [] } ] }
//! ```
//!
//! is answered with
//!
//! ```json
//! { "projectId": "123", "recommendedOrder": ["A"] }
//! ```
//!
//! HTTP itself is not handled here; [`status_for`] and [`ErrorBody`] give a
//! hosting service everything it needs to translate failures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dag;
use crate::errors::{Result, SchedulingError, TaskOrderError};
use crate::model::{Dependencies, Hours, Task, TaskTitle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub tasks: Vec<WireTask>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTask {
    pub title: String,
    pub estimated_hours: f64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub recommended_order: Vec<TaskTitle>,
}

/// Error body returned in place of a [`ScheduleResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub titles: Vec<TaskTitle>,
}

impl ErrorBody {
    pub fn from_scheduling_error(err: &SchedulingError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code(),
            titles: err.titles(),
        }
    }
}

impl From<&TaskOrderError> for ErrorBody {
    fn from(err: &TaskOrderError) -> Self {
        match err {
            TaskOrderError::Scheduling(inner) => ErrorBody::from_scheduling_error(inner),
            TaskOrderError::InvalidTask(_) | TaskOrderError::JsonError(_) => Self {
                error: err.to_string(),
                code: "invalid_request",
                titles: Vec::new(),
            },
            TaskOrderError::Timeout(_) => Self {
                error: err.to_string(),
                code: "timeout",
                titles: Vec::new(),
            },
            _ => Self {
                error: err.to_string(),
                code: "internal",
                titles: Vec::new(),
            },
        }
    }
}

/// HTTP status a service should answer with for `err`.
///
/// Domain and request errors are the client's fault (400). Timeouts map to
/// 504; anything else is a server-side failure (500).
pub fn status_for(err: &TaskOrderError) -> u16 {
    match err {
        TaskOrderError::Scheduling(_)
        | TaskOrderError::InvalidTask(_)
        | TaskOrderError::JsonError(_) => 400,
        TaskOrderError::Timeout(_) => 504,
        _ => 500,
    }
}

impl TryFrom<&WireTask> for Task {
    type Error = TaskOrderError;

    fn try_from(wire: &WireTask) -> std::result::Result<Self, Self::Error> {
        let hours = Hours::new(wire.estimated_hours).map_err(|e| e.in_task(&wire.title))?;
        let deps: Dependencies = wire.dependencies.iter().collect();
        Task::new(&wire.title, hours, wire.due_date, deps)
    }
}

impl From<&Task> for WireTask {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            estimated_hours: task.estimated_hours.get(),
            due_date: task.due_date,
            dependencies: task.dependencies.iter().map(str::to_string).collect(),
        }
    }
}

impl ScheduleRequest {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            tasks: tasks.iter().map(WireTask::from).collect(),
        }
    }

    /// Convert every wire task into a validated [`Task`], in request order.
    pub fn to_tasks(&self) -> Result<Vec<Task>> {
        self.tasks.iter().map(Task::try_from).collect()
    }
}

/// Answer a request body the way the scheduling endpoint does.
pub fn schedule_request(
    request: &ScheduleRequest,
    project_id: Option<&str>,
) -> Result<ScheduleResponse> {
    let tasks = request.to_tasks()?;
    debug!(tasks = tasks.len(), ?project_id, "handling schedule request");

    let recommended_order = dag::schedule(&tasks)?;

    Ok(ScheduleResponse {
        project_id: project_id.map(str::to_string),
        recommended_order,
    })
}
