// src/config/model.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{Dependencies, Task};
use crate::types::OutputFormat;

/// Task file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// project_id = "123"
/// start_date = "2024-01-01"
/// hours_per_day = 6.0
///
/// [task."Collect data"]
/// hours = 4
/// due = "2024-01-05"
///
/// [task."Write report"]
/// hours = 3.5
/// due = "2024-01-10"
/// after = ["Collect data"]
/// ```
///
/// All sections are optional; an empty file is an empty schedule.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTaskFile {
    /// Run settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[task.<title>]`, keyed by title.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[config]` section. Every field can be overridden on the command line.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Echoed back as `projectId` in JSON output.
    #[serde(default)]
    pub project_id: Option<String>,

    /// First working day of the projection. No projection without it.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Working hours available per calendar day.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,

    #[serde(default)]
    pub format: Option<OutputFormat>,
}

fn default_hours_per_day() -> f64 {
    8.0
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            project_id: None,
            start_date: None,
            hours_per_day: default_hours_per_day(),
            format: None,
        }
    }
}

/// `[task.<title>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// Estimated effort in hours.
    pub hours: f64,

    /// Due date, `"YYYY-MM-DD"`.
    pub due: NaiveDate,

    /// Titles this task waits for.
    #[serde(default)]
    pub after: AfterSpec,
}

/// `after` may be written as a list or as one comma-separated string:
///
/// ```toml
/// after = ["Design", "Review"]
/// after = "Design, Review"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AfterSpec {
    List(Vec<String>),
    Text(String),
}

impl Default for AfterSpec {
    fn default() -> Self {
        AfterSpec::List(Vec::new())
    }
}

impl AfterSpec {
    pub fn to_dependencies(&self) -> Dependencies {
        match self {
            AfterSpec::List(titles) => titles.iter().collect(),
            AfterSpec::Text(text) => Dependencies::parse_list(text),
        }
    }
}

/// A validated task file: run settings plus tasks ready for the engine.
///
/// Only per-task fields are validated here. Graph-level problems (unknown
/// references, cycles, duplicate titles from JSON input) are left to the
/// engine so they surface as `SchedulingError`s.
#[derive(Debug, Clone)]
pub struct TaskFile {
    config: ConfigSection,
    tasks: Vec<Task>,
}

impl TaskFile {
    pub(crate) fn new_unchecked(config: ConfigSection, tasks: Vec<Task>) -> Self {
        Self { config, tasks }
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_parts(self) -> (ConfigSection, Vec<Task>) {
        (self.config, self.tasks)
    }
}
