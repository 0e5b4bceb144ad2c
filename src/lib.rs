// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod model;
pub mod render;
pub mod report;
pub mod types;
pub mod wire;

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, ConfigSection};
use crate::dag::TaskGraph;
use crate::errors::{Result, TaskOrderError};
use crate::model::{Task, TaskTitle};
use crate::report::{project, ProjectionOptions};
use crate::types::OutputFormat;
use crate::wire::{ErrorBody, ScheduleResponse};

/// Settings for one run, after CLI flags have been layered over `[config]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub format: OutputFormat,
    pub project_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub hours_per_day: f64,
    pub timeout: Option<Duration>,
}

impl RunSettings {
    /// CLI flags win over the task file's `[config]` section.
    pub fn resolve(args: &CliArgs, cfg: &ConfigSection) -> Result<Self> {
        let hours_per_day = args.hours_per_day.unwrap_or(cfg.hours_per_day);
        if !hours_per_day.is_finite() || hours_per_day <= 0.0 {
            return Err(TaskOrderError::ConfigError(format!(
                "--hours-per-day must be > 0 (got {hours_per_day})"
            )));
        }

        Ok(Self {
            format: args.format.or(cfg.format).unwrap_or_default(),
            project_id: args.project.clone().or_else(|| cfg.project_id.clone()),
            start_date: args.start.or(cfg.start_date),
            hours_per_day,
            timeout: args.timeout_ms.map(Duration::from_millis),
        })
    }

    fn projection_options(&self) -> Result<Option<ProjectionOptions>> {
        self.start_date
            .map(|start| ProjectionOptions::new(start, self.hours_per_day))
            .transpose()
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - task file loading
/// - settings resolution
/// - the engine call, under an optional timeout
/// - output rendering
pub async fn run(args: CliArgs) -> Result<()> {
    let tasks_path = PathBuf::from(&args.tasks);
    let file = load_and_validate(&tasks_path)?;
    let settings = RunSettings::resolve(&args, file.config())?;
    debug!(?settings, path = ?tasks_path, "resolved run settings");

    if args.dry_run {
        dag::check(file.tasks())?;
        let graph = TaskGraph::build(file.tasks())?;
        print!("{}", render::render_dry_run(&file, &graph, &settings));
        debug!("dry-run complete (no order printed)");
        return Ok(());
    }

    let (_cfg, tasks) = file.into_parts();
    let (tasks, outcome) = schedule_with_timeout(tasks, settings.timeout).await?;

    let order = match outcome {
        Ok(order) => order,
        Err(err) => {
            let err = TaskOrderError::from(err);
            if settings.format == OutputFormat::Json {
                println!("{}", to_json(&ErrorBody::from(&err))?);
            }
            return Err(err);
        }
    };

    info!(tasks = order.len(), "schedule ready");

    match settings.format {
        OutputFormat::Json => {
            let response = ScheduleResponse {
                project_id: settings.project_id.clone(),
                recommended_order: order,
            };
            println!("{}", to_json(&response)?);
        }
        OutputFormat::Text => {
            let projection = settings
                .projection_options()?
                .map(|options| project(&order, &tasks, options));
            print!("{}", render::render_order(&order, projection.as_ref()));
        }
    }

    Ok(())
}

/// Run the engine on the blocking pool, giving up after `timeout` if set.
///
/// The tasks are handed back alongside the engine's result so callers can
/// keep using them (e.g. for the projection).
pub async fn schedule_with_timeout(
    tasks: Vec<Task>,
    timeout: Option<Duration>,
) -> Result<(Vec<Task>, std::result::Result<Vec<TaskTitle>, errors::SchedulingError>)> {
    let handle = tokio::task::spawn_blocking(move || {
        let outcome = dag::schedule(&tasks);
        (tasks, outcome)
    });

    let joined = match timeout {
        Some(limit) => tokio::time::timeout(limit, handle)
            .await
            .map_err(|_| TaskOrderError::Timeout(limit.as_millis() as u64))?,
        None => handle.await,
    };

    joined.map_err(|e| TaskOrderError::Other(e.into()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
