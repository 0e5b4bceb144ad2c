#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use taskorder::config::{AfterSpec, ConfigSection, RawTaskFile, TaskConfig, TaskFile};
use taskorder::model::{Dependencies, Hours, Task};

/// Parse a `YYYY-MM-DD` literal; panics on malformed test input.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid YYYY-MM-DD date in test")
}

/// Builder for `Task` to simplify test setup.
///
/// Defaults: 1 hour, due 2024-01-01, no dependencies.
pub struct TaskBuilder {
    title: String,
    hours: f64,
    due: NaiveDate,
    deps: Dependencies,
}

impl TaskBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            hours: 1.0,
            due: date("2024-01-01"),
            deps: Dependencies::new(),
        }
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.hours = hours;
        self
    }

    pub fn due(mut self, due: &str) -> Self {
        self.due = date(due);
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.deps.insert(dep);
        self
    }

    pub fn build(self) -> Task {
        let hours = Hours::new(self.hours).expect("positive hours in test task");
        Task::new(&self.title, hours, self.due, self.deps).expect("valid test task")
    }
}

/// Builder for `TaskFile`, going through the same validation as the loader.
pub struct TaskFileBuilder {
    file: RawTaskFile,
}

impl TaskFileBuilder {
    pub fn new() -> Self {
        Self {
            file: RawTaskFile {
                config: ConfigSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn with_task(mut self, title: &str, hours: f64, due: &str, after: &[&str]) -> Self {
        self.file.task.insert(
            title.to_string(),
            TaskConfig {
                hours,
                due: date(due),
                after: AfterSpec::List(after.iter().map(|s| s.to_string()).collect()),
            },
        );
        self
    }

    pub fn with_project_id(mut self, id: &str) -> Self {
        self.file.config.project_id = Some(id.to_string());
        self
    }

    pub fn with_start_date(mut self, start: &str) -> Self {
        self.file.config.start_date = Some(date(start));
        self
    }

    pub fn with_hours_per_day(mut self, hours: f64) -> Self {
        self.file.config.hours_per_day = hours;
        self
    }

    pub fn build_raw(self) -> RawTaskFile {
        self.file
    }

    pub fn build(self) -> TaskFile {
        TaskFile::try_from(self.file).expect("Failed to build valid task file from builder")
    }
}

impl Default for TaskFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
