// src/render.rs

//! Human-readable output for the CLI.
//!
//! Everything here returns a `String` so the runner decides where it goes.

use std::fmt::Write as _;

use crate::config::TaskFile;
use crate::dag::TaskGraph;
use crate::model::TaskTitle;
use crate::report::Projection;
use crate::RunSettings;

/// Numbered recommended order, followed by the projection if one was made.
pub fn render_order(order: &[TaskTitle], projection: Option<&Projection>) -> String {
    let mut out = String::new();

    if order.is_empty() {
        out.push_str("no tasks to schedule\n");
        return out;
    }

    out.push_str("recommended order:\n");
    let width = order.len().to_string().len();
    for (i, title) in order.iter().enumerate() {
        let _ = writeln!(out, "  {:>width$}. {title}", i + 1);
    }

    if let Some(projection) = projection {
        out.push('\n');
        out.push_str(&render_projection(projection));
    }

    out
}

pub fn render_projection(projection: &Projection) -> String {
    let mut out = String::new();

    out.push_str("projected timeline:\n");
    for row in &projection.tasks {
        let status = if row.is_late() {
            format!("LATE by {} day(s)", row.days_late)
        } else {
            "on time".to_string()
        };
        let _ = writeln!(
            out,
            "  - {}: hours {:.1}..{:.1}, finishes {} (due {}), {}",
            row.title, row.start_hour, row.finish_hour, row.finish_date, row.due_date, status
        );
    }

    let kpi = &projection.kpi;
    let _ = writeln!(out, "  total effort: {:.1}h", kpi.makespan_hours);
    let _ = writeln!(
        out,
        "  late tasks: {} ({:.0}% on time), total days late: {}, worst: {}",
        kpi.late_count,
        kpi.on_time_rate * 100.0,
        kpi.total_days_late,
        kpi.max_days_late
    );

    out
}

/// Dry-run listing: the resolved run settings, every task with its estimate,
/// due date and dependencies, then the graph roots.
pub fn render_dry_run(file: &TaskFile, graph: &TaskGraph<'_>, settings: &RunSettings) -> String {
    let mut out = String::new();

    out.push_str("taskorder dry-run\n");
    if let Some(project_id) = &settings.project_id {
        let _ = writeln!(out, "  project_id = {project_id}");
    }
    if let Some(start) = settings.start_date {
        let _ = writeln!(out, "  start_date = {start}");
    }
    let _ = writeln!(out, "  hours_per_day = {}", settings.hours_per_day);
    let _ = writeln!(out, "  format = {:?}", settings.format);
    if let Some(limit) = settings.timeout {
        let _ = writeln!(out, "  timeout = {}ms", limit.as_millis());
    }
    out.push('\n');

    let _ = writeln!(out, "tasks ({}):", file.tasks().len());
    for task in file.tasks() {
        let _ = writeln!(out, "  - {}", task.title);
        let _ = writeln!(out, "      estimate: {}", task.estimated_hours);
        let _ = writeln!(out, "      due: {}", task.due_date);
        let deps = graph.dependencies_of(&task.title);
        if !deps.is_empty() {
            let _ = writeln!(out, "      after: {:?}", deps);
        }
    }

    let _ = writeln!(out, "roots: {:?}", graph.roots());
    out
}
