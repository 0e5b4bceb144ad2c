// src/config/validate.rs

use crate::config::model::{ConfigSection, RawTaskFile, TaskConfig, TaskFile};
use crate::errors::{Result, TaskOrderError};
use crate::model::{Hours, Task};
use crate::wire::ScheduleRequest;

impl TryFrom<RawTaskFile> for TaskFile {
    type Error = TaskOrderError;

    fn try_from(raw: RawTaskFile) -> std::result::Result<Self, Self::Error> {
        validate_config_section(&raw.config)?;

        let tasks = raw
            .task
            .iter()
            .map(|(title, tc)| task_from_config(title, tc))
            .collect::<Result<Vec<_>>>()?;

        Ok(TaskFile::new_unchecked(raw.config, tasks))
    }
}

impl TryFrom<ScheduleRequest> for TaskFile {
    type Error = TaskOrderError;

    fn try_from(request: ScheduleRequest) -> std::result::Result<Self, Self::Error> {
        let tasks = request.to_tasks()?;
        Ok(TaskFile::new_unchecked(ConfigSection::default(), tasks))
    }
}

fn validate_config_section(cfg: &ConfigSection) -> Result<()> {
    if !cfg.hours_per_day.is_finite() || cfg.hours_per_day <= 0.0 {
        return Err(TaskOrderError::ConfigError(format!(
            "[config].hours_per_day must be > 0 (got {})",
            cfg.hours_per_day
        )));
    }

    if let Some(project_id) = &cfg.project_id {
        if project_id.trim().is_empty() {
            return Err(TaskOrderError::ConfigError(
                "[config].project_id must not be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

fn task_from_config(title: &str, tc: &TaskConfig) -> Result<Task> {
    let hours = Hours::new(tc.hours).map_err(|e| e.in_task(title))?;

    // Table keys are unique but not trimmed; " A" and "A" would collide once
    // the title is normalised.
    if title.trim() != title {
        return Err(TaskOrderError::InvalidTask(format!(
            "task {title:?}: title must not have leading or trailing whitespace"
        )));
    }

    Task::new(title, hours, tc.due, tc.after.to_dependencies())
}
