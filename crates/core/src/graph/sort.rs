//! Topological ordering of tasks (Kahn's algorithm)

use super::DependencyGraph;
use crate::error::{BoardError, BoardResult};
use crate::models::{Task, ensure_unique_ids};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, warn};

/// Order tasks so every blocker comes before the tasks it blocks.
///
/// The in-degree of a task is the number of its direct blockers present in
/// the snapshot. Tasks that start at zero are queued in input order, and
/// dependents are released in input order as their blockers are emitted,
/// so equal inputs always give equal output. Blocker ids that name no task
/// cannot be emitted and are left out of the in-degree.
///
/// # Errors
///
/// Returns `BoardError::ValidationError` when two tasks share an id, and
/// `BoardError::CyclicGraph` when some tasks could not be ordered. No
/// partial ordering is returned in either case.
pub fn topological_sort(tasks: &[Task]) -> BoardResult<Vec<&Task>> {
    ensure_unique_ids(tasks)?;
    let graph = DependencyGraph::build(tasks);

    let mut by_id: HashMap<&str, &Task> = HashMap::with_capacity(tasks.len());
    for task in tasks {
        by_id.entry(task.id.as_str()).or_insert(task);
    }

    let dangling = graph.dangling_blockers();
    if !dangling.is_empty() {
        debug!(count = dangling.len(), "ignoring blockers missing from snapshot");
    }

    let mut in_degree: HashMap<&str, usize> = graph
        .task_ids()
        .iter()
        .map(|&id| {
            let degree = graph
                .blockers_of(id)
                .iter()
                .filter(|b| graph.contains(b))
                .count();
            (id, degree)
        })
        .collect();

    let mut queue: VecDeque<&str> = graph
        .task_ids()
        .iter()
        .copied()
        .filter(|id| in_degree.get(id) == Some(&0))
        .collect();

    let reverse = graph.reverse_edges();
    let mut ordered = Vec::with_capacity(graph.len());

    while let Some(current) = queue.pop_front() {
        if let Some(&task) = by_id.get(current) {
            ordered.push(task);
        }

        for &dependent in reverse.get(current).map(Vec::as_slice).unwrap_or(&[]) {
            if let Some(degree) = in_degree.get_mut(dependent) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(dependent);
                }
            }
        }
    }

    if ordered.len() < tasks.len() {
        warn!(
            ordered = ordered.len(),
            total = tasks.len(),
            "topological sort found a cycle"
        );
        return Err(BoardError::CyclicGraph {
            ordered: ordered.len(),
            total: tasks.len(),
        });
    }

    Ok(ordered)
}
