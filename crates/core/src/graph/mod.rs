//! Dependency graph analysis
//!
//! Builds an adjacency view of "blocked-by" edges from a task snapshot and
//! runs the traversals the board needs: cycle detection, the pre-commit
//! cycle gate, blocker resolution and topological ordering.
//!
//! All traversal state (visited sets, recursion stacks, queues) lives in
//! the individual call, so every function here is safe to call from
//! several threads at once.

mod blocking;
mod cycles;
mod sort;

pub use blocking::{get_blocking_chain, get_dependents, get_incomplete_blockers, is_task_blocked};
pub use cycles::{
    Cycle, detect_cycles, format_cycle_path, validate_new_dependency, would_create_cycle,
};
pub use sort::topological_sort;

use crate::models::Task;
use std::collections::{HashMap, HashSet};

/// Mapping from every task id to its direct blockers.
///
/// Every task in the snapshot is a key, even when it has no blockers.
/// Blocker lists are de-duplicated and keep first-seen edge order so
/// traversals visit neighbours deterministically. Edges naming unknown
/// blockers are kept as-is; the unknown ids simply have no blockers of
/// their own.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph<'a> {
    order: Vec<&'a str>,
    blockers: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph from the `blocked_by` edges carried on each task.
    pub fn build(tasks: &'a [Task]) -> Self {
        let mut order = Vec::with_capacity(tasks.len());
        let mut blockers: HashMap<&'a str, Vec<&'a str>> = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let entry = blockers.entry(task.id.as_str()).or_insert_with(|| {
                order.push(task.id.as_str());
                Vec::new()
            });
            for blocker_id in task.blocker_ids() {
                if !entry.contains(&blocker_id) {
                    entry.push(blocker_id);
                }
            }
        }

        Self { order, blockers }
    }

    /// Task ids in input order.
    pub fn task_ids(&self) -> &[&'a str] {
        &self.order
    }

    /// Number of tasks in the graph.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph has no tasks.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `task_id` belongs to the snapshot.
    pub fn contains(&self, task_id: &str) -> bool {
        self.blockers.contains_key(task_id)
    }

    /// Direct blockers of `task_id`; empty for unknown ids.
    pub fn blockers_of(&self, task_id: &str) -> &[&'a str] {
        self.blockers
            .get(task_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the edge `task_id` blocked-by `blocked_by_id` exists.
    pub fn has_edge(&self, task_id: &str, blocked_by_id: &str) -> bool {
        self.blockers_of(task_id).contains(&blocked_by_id)
    }

    /// Tasks that list `task_id` as a direct blocker, in input order.
    pub fn dependents_of(&self, task_id: &str) -> Vec<&'a str> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.has_edge(id, task_id))
            .collect()
    }

    /// Reverse adjacency for every blocker id that appears in the graph.
    ///
    /// Each dependent list keeps input order.
    pub fn reverse_edges(&self) -> HashMap<&'a str, Vec<&'a str>> {
        let mut reverse: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        for &id in &self.order {
            for &blocker in self.blockers_of(id) {
                reverse.entry(blocker).or_default().push(id);
            }
        }
        reverse
    }

    /// Blocker ids that do not name a task in the snapshot.
    pub fn dangling_blockers(&self) -> HashSet<&'a str> {
        self.order
            .iter()
            .flat_map(|id| self.blockers_of(id).iter().copied())
            .filter(|blocker| !self.contains(blocker))
            .collect()
    }
}
