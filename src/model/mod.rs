// src/model/mod.rs

//! Task data model shared by the engine, the task file loader and the wire
//! types.
//!
//! - [`task`] holds [`Task`] and its validated [`Hours`] duration.
//! - [`dependencies`] holds the [`Dependencies`] set of referenced titles.

pub mod dependencies;
pub mod task;

pub use dependencies::Dependencies;
pub use task::{Hours, Task};

/// Tasks are identified by their user-visible title.
pub type TaskTitle = String;
