// src/config/mod.rs

//! Task file loading and validation for taskorder.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a task file (TOML or JSON request body) from disk (`loader.rs`).
//! - Validate per-task fields and run settings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_with_fs, parse_task_file, TaskFileFormat};
pub use model::{AfterSpec, ConfigSection, RawTaskFile, TaskConfig, TaskFile};
