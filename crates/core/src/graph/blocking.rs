//! Blocked-status resolution
//!
//! Status here is computed from *direct* blockers only. A task whose
//! blocker is itself blocked by unfinished work is not flagged through
//! that chain; use [`get_blocking_chain`] to see the transitive set.

use super::DependencyGraph;
use crate::models::Task;
use std::collections::{HashMap, HashSet, VecDeque};

fn index_by_id(tasks: &[Task]) -> HashMap<&str, &Task> {
    tasks.iter().map(|t| (t.id.as_str(), t)).collect()
}

/// Direct blockers of `task` that are present in `all_tasks` and not done.
///
/// Blocker ids that no longer name a task are skipped. Each blocker is
/// reported once, in edge order.
pub fn get_incomplete_blockers<'a>(task: &Task, all_tasks: &'a [Task]) -> Vec<&'a Task> {
    let by_id = index_by_id(all_tasks);
    let mut seen = HashSet::new();

    task.blocker_ids()
        .filter(|id| seen.insert(*id))
        .filter_map(|id| by_id.get(id).copied())
        .filter(|blocker| !blocker.status.is_done())
        .collect()
}

/// True when at least one direct blocker of `task` is not done.
pub fn is_task_blocked(task: &Task, all_tasks: &[Task]) -> bool {
    !get_incomplete_blockers(task, all_tasks).is_empty()
}

/// Every task that transitively blocks `task_id`, nearest first.
///
/// Breadth-first over blocked-by edges. Each id appears once however many
/// paths reach it, and `task_id` itself is never included, even when the
/// edges loop back to it. Unknown blocker ids are included as reached.
pub fn get_blocking_chain(task_id: &str, tasks: &[Task]) -> Vec<String> {
    let graph = DependencyGraph::build(tasks);

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue = VecDeque::new();
    let mut chain = Vec::new();

    visited.insert(task_id);
    queue.push_back(task_id);

    while let Some(current) = queue.pop_front() {
        for &blocker in graph.blockers_of(current) {
            if visited.insert(blocker) {
                chain.push(blocker.to_string());
                queue.push_back(blocker);
            }
        }
    }

    chain
}

/// Tasks that list `task_id` as a direct blocker, in input order.
pub fn get_dependents<'a>(task_id: &str, tasks: &'a [Task]) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.blocker_ids().any(|id| id == task_id))
        .collect()
}
