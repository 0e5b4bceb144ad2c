// src/cli.rs

//! CLI argument parsing using `clap`.

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::types::OutputFormat;

/// Command-line arguments for `taskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskorder",
    version,
    about = "Order tasks by dependencies, due dates and estimated effort.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task file (TOML, or a JSON schedule request if it ends in `.json`).
    #[arg(long, value_name = "PATH", default_value = "Tasks.toml")]
    pub tasks: String,

    /// Output format. Overrides `[config].format`.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Project id echoed in JSON output. Overrides `[config].project_id`.
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,

    /// First working day (YYYY-MM-DD); enables the projected timeline.
    /// Overrides `[config].start_date`.
    #[arg(long, value_name = "DATE")]
    pub start: Option<NaiveDate>,

    /// Working hours per day for the projection. Overrides `[config].hours_per_day`.
    #[arg(long, value_name = "HOURS")]
    pub hours_per_day: Option<f64>,

    /// Give up if ordering takes longer than this many milliseconds.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Parse + validate, print the task table, but don't print an order.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
