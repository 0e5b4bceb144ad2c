// src/dag/mod.rs

//! Dependency graph and ordering engine.
//!
//! - [`graph`] validates titles and references and holds adjacency lists.
//! - [`scheduler`] produces the priority-driven topological order.
//! - `cycles` explains why tasks were left unordered.
//!
//! The engine is a pure function of its input: nothing here keeps state
//! between calls, so concurrent callers need no coordination.

mod cycles;
pub mod graph;
pub mod scheduler;

pub use graph::TaskGraph;
pub use scheduler::{check, schedule};
