// src/model/task.rs

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::{Result, TaskOrderError};
use crate::model::{Dependencies, TaskTitle};

/// Estimated effort of a task, in hours.
///
/// Always finite and strictly positive, which is what makes the total order
/// below sound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Hours(f64);

impl Hours {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(TaskOrderError::InvalidTask(format!(
                "estimated hours must be a positive number (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Eq for Hours {}

impl PartialOrd for Hours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hours {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Hours {
    type Error = TaskOrderError;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        Hours::new(value)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}

/// A unit of work to be ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub title: TaskTitle,
    pub estimated_hours: Hours,
    pub due_date: NaiveDate,
    pub dependencies: Dependencies,
}

impl Task {
    /// Build a task, rejecting blank titles. The title is stored trimmed so it
    /// matches the way [`Dependencies`] stores references.
    pub fn new(
        title: impl AsRef<str>,
        estimated_hours: Hours,
        due_date: NaiveDate,
        dependencies: Dependencies,
    ) -> Result<Self> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(TaskOrderError::InvalidTask(
                "task title must not be empty".to_string(),
            ));
        }

        Ok(Self {
            title: title.to_string(),
            estimated_hours,
            due_date,
            dependencies,
        })
    }

    pub fn depends_on(&self, title: &str) -> bool {
        self.dependencies.contains(title)
    }
}
