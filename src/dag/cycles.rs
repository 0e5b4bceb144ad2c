// src/dag/cycles.rs

//! Cycle diagnostics for tasks the ordering pass could not place.

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::dag::graph::TaskGraph;
use crate::errors::SchedulingError;
use crate::model::TaskTitle;

/// Split the unscheduled tasks into those on a cycle and those merely
/// downstream of one.
///
/// Only the leftover subgraph is analysed: every unscheduled task has at least
/// one unscheduled dependency, so each one either sits in a strongly connected
/// component of size > 1, depends on itself, or is blocked by such a
/// component.
pub(crate) fn classify_unscheduled(
    graph: &TaskGraph<'_>,
    unscheduled: &[usize],
) -> SchedulingError {
    // Edge direction: dep -> task, as in the ordering pass.
    let mut leftover: DiGraphMap<&str, ()> = DiGraphMap::new();

    for &idx in unscheduled {
        leftover.add_node(graph.title(idx));
    }
    for &idx in unscheduled {
        let title = graph.title(idx);
        for &dep in graph.dep_indices(idx) {
            let dep_title = graph.title(dep);
            if leftover.contains_node(dep_title) {
                leftover.add_edge(dep_title, title, ());
            }
        }
    }

    let mut cycle: Vec<TaskTitle> = Vec::new();
    let mut blocked: Vec<TaskTitle> = Vec::new();

    for component in tarjan_scc(&leftover) {
        let on_cycle = component.len() > 1
            || component
                .first()
                .is_some_and(|&node| leftover.contains_edge(node, node));

        let bucket = if on_cycle { &mut cycle } else { &mut blocked };
        bucket.extend(component.into_iter().map(str::to_string));
    }

    cycle.sort();
    blocked.sort();

    warn!(?cycle, ?blocked, "dependency cycle prevents a total order");

    SchedulingError::CyclicDependency { cycle, blocked }
}
