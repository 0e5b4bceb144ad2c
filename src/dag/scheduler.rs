// src/dag/scheduler.rs

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::dag::cycles::classify_unscheduled;
use crate::dag::graph::TaskGraph;
use crate::errors::SchedulingError;
use crate::model::{Hours, Task, TaskTitle};

/// Priority of a ready task. Field order is the tie-break order: earliest due
/// date, then shortest estimate, then smallest title. Titles are unique, so
/// `idx` never decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ReadyKey<'a> {
    due_date: NaiveDate,
    hours: Hours,
    title: &'a str,
    idx: usize,
}

impl<'a> ReadyKey<'a> {
    fn of(graph: &TaskGraph<'a>, idx: usize) -> Self {
        let task = graph.task(idx);
        Self {
            due_date: task.due_date,
            hours: task.estimated_hours,
            title: task.title.as_str(),
            idx,
        }
    }
}

/// Order `tasks` so that every task comes after all of its dependencies.
///
/// Among tasks whose dependencies are already placed, the earliest due date
/// goes first, then the shortest estimate, then the lexicographically
/// smallest title. The input is only read; an empty input yields an empty
/// order.
pub fn schedule(tasks: &[Task]) -> Result<Vec<TaskTitle>, SchedulingError> {
    let graph = TaskGraph::build(tasks)?;
    graph.ready_order()
}

/// Run the same validation and ordering as [`schedule`], discarding the order.
pub fn check(tasks: &[Task]) -> Result<(), SchedulingError> {
    schedule(tasks).map(|_| ())
}

impl<'a> TaskGraph<'a> {
    /// Priority-driven topological ordering (Kahn's algorithm with a min-heap
    /// for the ready set).
    pub fn ready_order(&self) -> Result<Vec<TaskTitle>, SchedulingError> {
        let n = self.len();
        let mut remaining: Vec<usize> = (0..n).map(|i| self.dep_indices(i).len()).collect();
        let mut scheduled = vec![false; n];
        let mut ready: BinaryHeap<Reverse<ReadyKey<'a>>> = BinaryHeap::new();

        for (idx, &count) in remaining.iter().enumerate() {
            if count == 0 {
                ready.push(Reverse(ReadyKey::of(self, idx)));
            }
        }

        let mut order: Vec<TaskTitle> = Vec::with_capacity(n);

        while let Some(Reverse(key)) = ready.pop() {
            debug!(
                task = key.title,
                due = %key.due_date,
                hours = key.hours.get(),
                position = order.len(),
                "placing ready task"
            );
            scheduled[key.idx] = true;
            order.push(key.title.to_string());

            for &dependent in self.dependent_indices(key.idx) {
                remaining[dependent] -= 1;
                if remaining[dependent] == 0 {
                    ready.push(Reverse(ReadyKey::of(self, dependent)));
                }
            }
        }

        if order.len() == n {
            info!(tasks = n, "computed schedule order");
            return Ok(order);
        }

        let unscheduled: Vec<usize> = (0..n).filter(|&i| !scheduled[i]).collect();
        Err(classify_unscheduled(self, &unscheduled))
    }
}
