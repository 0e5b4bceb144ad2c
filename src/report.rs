// src/report.rs

//! Projected timeline for a recommended order.
//!
//! Tasks are assumed to run back to back, one at a time, at
//! `hours_per_day` working hours per calendar day starting on `start_date`.
//! The result shows when each task would finish and how late it would be
//! against its due date, plus aggregate indicators for the whole order.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::warn;

use crate::errors::{Result, TaskOrderError};
use crate::model::{Task, TaskTitle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionOptions {
    pub start_date: NaiveDate,
    pub hours_per_day: f64,
}

impl ProjectionOptions {
    pub fn new(start_date: NaiveDate, hours_per_day: f64) -> Result<Self> {
        if !hours_per_day.is_finite() || hours_per_day <= 0.0 {
            return Err(TaskOrderError::ConfigError(format!(
                "hours_per_day must be > 0 (got {hours_per_day})"
            )));
        }
        Ok(Self {
            start_date,
            hours_per_day,
        })
    }
}

/// One row of the projected timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProjection {
    pub title: TaskTitle,
    /// Cumulative working hours before this task starts.
    pub start_hour: f64,
    /// Cumulative working hours once this task is done.
    pub finish_hour: f64,
    pub finish_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Whole days past the due date; 0 when on time.
    pub days_late: i64,
}

impl TaskProjection {
    pub fn is_late(&self) -> bool {
        self.days_late > 0
    }
}

/// Aggregate lateness indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleKpi {
    /// Total working hours of the whole order.
    pub makespan_hours: f64,
    pub total_days_late: i64,
    pub max_days_late: i64,
    pub late_count: usize,
    /// Fraction of tasks finishing on or before their due date (0.0..=1.0).
    pub on_time_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub tasks: Vec<TaskProjection>,
    pub kpi: ScheduleKpi,
}

/// Lay `order` out on the calendar.
///
/// Titles in `order` that have no matching task are skipped.
pub fn project(order: &[TaskTitle], tasks: &[Task], options: ProjectionOptions) -> Projection {
    let by_title: HashMap<&str, &Task> = tasks.iter().map(|t| (t.title.as_str(), t)).collect();

    let mut rows = Vec::with_capacity(order.len());
    let mut elapsed = 0.0_f64;

    for title in order {
        let Some(task) = by_title.get(title.as_str()) else {
            warn!(task = %title, "ordered title has no matching task; skipping");
            continue;
        };

        let start_hour = elapsed;
        elapsed += task.estimated_hours.get();

        let finish_date = finish_date_for(elapsed, options);
        let days_late = (finish_date - task.due_date).num_days().max(0);

        rows.push(TaskProjection {
            title: task.title.clone(),
            start_hour,
            finish_hour: elapsed,
            finish_date,
            due_date: task.due_date,
            days_late,
        });
    }

    let kpi = kpi_for(&rows, elapsed);
    Projection { tasks: rows, kpi }
}

const DAY_SNAP: f64 = 1e9;

/// The calendar day on which cumulative hour `elapsed` is reached.
///
/// Day 0 covers hours (0, hours_per_day], day 1 the next block, and so on.
/// The day count is snapped to `DAY_SNAP` before rounding up, so summed
/// estimates that land on a day boundary stay on that day.
fn finish_date_for(elapsed: f64, options: ProjectionOptions) -> NaiveDate {
    let days = ((elapsed / options.hours_per_day) * DAY_SNAP).round() / DAY_SNAP;
    let day_index = (days.ceil() as u64).saturating_sub(1);
    options
        .start_date
        .checked_add_days(Days::new(day_index))
        .unwrap_or(NaiveDate::MAX)
}

fn kpi_for(rows: &[TaskProjection], makespan_hours: f64) -> ScheduleKpi {
    let late_count = rows.iter().filter(|r| r.is_late()).count();
    let total_days_late = rows.iter().map(|r| r.days_late).sum();
    let max_days_late = rows.iter().map(|r| r.days_late).max().unwrap_or(0);

    let on_time_rate = if rows.is_empty() {
        1.0
    } else {
        (rows.len() - late_count) as f64 / rows.len() as f64
    };

    ScheduleKpi {
        makespan_hours,
        total_days_late,
        max_days_late,
        late_count,
        on_time_rate,
    }
}
