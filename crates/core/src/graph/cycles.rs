//! Cycle detection over the blocked-by graph
//!
//! Two entry points: [`detect_cycles`] audits an existing snapshot, and
//! [`would_create_cycle`] / [`validate_new_dependency`] gate a proposed
//! edge before it is stored.

use super::DependencyGraph;
use crate::error::{BoardError, BoardResult};
use crate::models::Task;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// A loop of blocked-by edges.
///
/// `path[i]` is blocked by `path[i + 1]`, and the last entry is blocked by
/// the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    pub path: Vec<String>,
}

impl Cycle {
    /// Number of tasks in the loop.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the loop is empty (never produced by detection).
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether `task_id` takes part in the loop.
    pub fn contains(&self, task_id: &str) -> bool {
        self.path.iter().any(|id| id == task_id)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path.first() {
            Some(first) => write!(f, "{} -> {}", self.path.join(" -> "), first),
            None => Ok(()),
        }
    }
}

/// Format a path of task ids as `a -> b -> c`.
pub fn format_cycle_path(path: &[String]) -> String {
    path.join(" -> ")
}

/// Per-call DFS state for [`detect_cycles`].
struct CycleSearch<'g, 'a> {
    graph: &'g DependencyGraph<'a>,
    visited: HashSet<&'a str>,
    on_stack: HashSet<&'a str>,
    path: Vec<&'a str>,
    cycles: Vec<Cycle>,
}

impl<'g, 'a> CycleSearch<'g, 'a> {
    fn new(graph: &'g DependencyGraph<'a>) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            on_stack: HashSet::new(),
            path: Vec::new(),
            cycles: Vec::new(),
        }
    }

    fn visit(&mut self, node: &'a str) {
        let graph = self.graph;

        self.visited.insert(node);
        self.on_stack.insert(node);
        self.path.push(node);

        for &blocker in graph.blockers_of(node) {
            if self.on_stack.contains(blocker) {
                // Back edge: the loop is the path from the blocker's first occurrence
                if let Some(start) = self.path.iter().position(|&id| id == blocker) {
                    let path = self.path[start..].iter().map(|id| id.to_string()).collect();
                    self.cycles.push(Cycle { path });
                }
            } else if !self.visited.contains(blocker) {
                self.visit(blocker);
            }
        }

        self.path.pop();
        self.on_stack.remove(node);
    }
}

/// Detect cycles in the blocked-by graph of `tasks`.
///
/// Runs a depth-first search from every task in input order. Each back
/// edge found yields one [`Cycle`]. A fully explored node is never
/// expanded again, so the result has at least one cycle per cyclic
/// strongly-connected component. It is not a full list of every
/// elementary cycle. The same input always gives the same output.
pub fn detect_cycles(tasks: &[Task]) -> Vec<Cycle> {
    let graph = DependencyGraph::build(tasks);
    let mut search = CycleSearch::new(&graph);

    for &id in graph.task_ids() {
        if !search.visited.contains(id) {
            search.visit(id);
        }
    }

    if !search.cycles.is_empty() {
        warn!(count = search.cycles.len(), "dependency cycles detected");
    }

    search.cycles
}

/// DFS from `current` looking for `target`, recording the path taken.
fn find_path<'a>(
    graph: &DependencyGraph<'a>,
    current: &'a str,
    target: &str,
    visited: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> bool {
    path.push(current);
    if current == target {
        return true;
    }
    visited.insert(current);

    for &blocker in graph.blockers_of(current) {
        if !visited.contains(blocker) && find_path(graph, blocker, target, visited, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Check whether adding "`task_id` is blocked by `blocked_by_id`" would
/// close a cycle.
///
/// With the new edge in place, a cycle exists exactly when `task_id` is
/// reachable from `blocked_by_id` along existing blocked-by edges. The
/// search therefore starts at `blocked_by_id`, and the new edge never
/// needs to be followed.
///
/// # Returns
///
/// `Some(path)` running from `blocked_by_id` to `task_id` (inclusive) when
/// the edge would close a loop, `None` when it is safe. A self-edge
/// returns `Some(vec![task_id])`.
///
/// # Example
///
/// ```
/// use taskboard_core::{Task, would_create_cycle};
///
/// let tasks = vec![
///     Task::new("a", "A").blocked_by("b"),
///     Task::new("b", "B").blocked_by("c"),
///     Task::new("c", "C"),
/// ];
/// let path = would_create_cycle("c", "a", &tasks);
/// assert_eq!(path, Some(vec!["a".to_string(), "b".to_string(), "c".to_string()]));
/// ```
pub fn would_create_cycle(
    task_id: &str,
    blocked_by_id: &str,
    tasks: &[Task],
) -> Option<Vec<String>> {
    if task_id == blocked_by_id {
        return Some(vec![task_id.to_string()]);
    }

    let graph = DependencyGraph::build(tasks);
    let mut visited = HashSet::new();
    let mut path = Vec::new();

    if find_path(&graph, blocked_by_id, task_id, &mut visited, &mut path) {
        Some(path.into_iter().map(str::to_string).collect())
    } else {
        None
    }
}

/// Validate a proposed dependency edge before it is stored.
///
/// # Errors
///
/// Returns `BoardError` if:
/// - the task would block itself (`SelfDependency`)
/// - either task is missing from the snapshot (`TaskNotFound`)
/// - the edge is already recorded (`DuplicateDependency`)
/// - the edge would close a loop (`CircularDependency`)
pub fn validate_new_dependency(
    task_id: &str,
    blocked_by_id: &str,
    tasks: &[Task],
) -> BoardResult<()> {
    if task_id == blocked_by_id {
        return Err(BoardError::SelfDependency {
            task_id: task_id.to_string(),
        });
    }

    let graph = DependencyGraph::build(tasks);
    for id in [task_id, blocked_by_id] {
        if !graph.contains(id) {
            return Err(BoardError::TaskNotFound {
                task_id: id.to_string(),
            });
        }
    }

    if graph.has_edge(task_id, blocked_by_id) {
        return Err(BoardError::DuplicateDependency {
            task_id: task_id.to_string(),
            blocked_by_id: blocked_by_id.to_string(),
        });
    }

    if let Some(path) = would_create_cycle(task_id, blocked_by_id, tasks) {
        debug!(
            task_id,
            blocked_by_id,
            path = %format_cycle_path(&path),
            "rejecting circular dependency"
        );
        return Err(BoardError::CircularDependency {
            task_id: task_id.to_string(),
            blocked_by_id: blocked_by_id.to_string(),
            path,
        });
    }

    Ok(())
}
