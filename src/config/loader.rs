// src/config/loader.rs

use std::path::Path;

use tracing::debug;

use crate::config::model::{RawTaskFile, TaskFile};
use crate::errors::{Result, TaskOrderError};
use crate::fs::{FileSystem, RealFileSystem};
use crate::wire::ScheduleRequest;

/// Input formats a task file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFileFormat {
    /// `[task.<title>]` tables.
    Toml,
    /// A schedule request body, `{ "tasks": [...] }`.
    Json,
}

impl TaskFileFormat {
    /// `.json` selects JSON; anything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => TaskFileFormat::Json,
            _ => TaskFileFormat::Toml,
        }
    }
}

/// Load a TOML task file from a given path and return the raw `RawTaskFile`.
///
/// This only performs TOML deserialization; it does **not** validate task
/// fields. Use [`load_and_validate`] for that. A `.json` path has no raw TOML
/// form and is rejected with a `ConfigError`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTaskFile> {
    let path = path.as_ref();
    if TaskFileFormat::from_path(path) == TaskFileFormat::Json {
        return Err(TaskOrderError::ConfigError(format!(
            "{} is a JSON request body; load it with load_and_validate",
            path.display()
        )));
    }
    let contents = read(&RealFileSystem, path)?;
    let raw: RawTaskFile = toml::from_str(&contents)?;
    Ok(raw)
}

/// Load a task file (TOML or JSON, by extension) and validate every task.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TaskFile> {
    load_with_fs(&RealFileSystem, path)
}

/// Same as [`load_and_validate`], reading through `fs`.
pub fn load_with_fs(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<TaskFile> {
    let path = path.as_ref();
    let contents = read(fs, path)?;
    let format = TaskFileFormat::from_path(path);
    debug!(?path, ?format, "parsing task file");
    parse_task_file(&contents, format)
}

/// Parse task file contents that are already in memory.
pub fn parse_task_file(contents: &str, format: TaskFileFormat) -> Result<TaskFile> {
    match format {
        TaskFileFormat::Toml => {
            let raw: RawTaskFile = toml::from_str(contents)?;
            TaskFile::try_from(raw)
        }
        TaskFileFormat::Json => {
            let request: ScheduleRequest = serde_json::from_str(contents)?;
            TaskFile::try_from(request)
        }
    }
}

fn read(fs: &dyn FileSystem, path: &Path) -> Result<String> {
    if !fs.is_file(path) {
        return Err(TaskOrderError::ConfigError(format!(
            "task file not found: {}",
            path.display()
        )));
    }
    Ok(fs.read_to_string(path)?)
}
