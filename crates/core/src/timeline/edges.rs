//! Dependency arrows between placed bars

use super::GanttTask;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// A blocked-by edge resolved onto two placed bars.
///
/// Endpoints are row indices into the laid-out task list, so the arrow
/// runs from the blocker's bar to the blocked task's bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanttDependency {
    pub task_id: String,
    pub blocked_by_id: String,
    /// Row of the blocked task.
    pub task_row: usize,
    /// Row of the blocker.
    pub blocked_by_row: usize,
    /// Whether the blocker is done.
    pub is_complete: bool,
}

/// Resolve each task's direct blockers onto the placed bars.
///
/// Blockers that are not among `tasks` (deleted, or filtered out of the
/// view) are skipped without error. Duplicate edges produce one arrow.
pub fn resolve_dependencies(tasks: &[GanttTask]) -> Vec<GanttDependency> {
    let by_id: HashMap<&str, &GanttTask> =
        tasks.iter().map(|g| (g.task.id.as_str(), g)).collect();

    let mut dependencies = Vec::new();
    for gantt in tasks {
        let mut seen = HashSet::new();
        for blocker_id in gantt.task.blocker_ids() {
            if !seen.insert(blocker_id) {
                continue;
            }
            let Some(blocker) = by_id.get(blocker_id) else {
                trace!(
                    task_id = %gantt.task.id,
                    blocked_by_id = blocker_id,
                    "skipping arrow to missing blocker"
                );
                continue;
            };
            dependencies.push(GanttDependency {
                task_id: gantt.task.id.clone(),
                blocked_by_id: blocker_id.to_string(),
                task_row: gantt.row,
                blocked_by_row: blocker.row,
                is_complete: blocker.task.status.is_done(),
            });
        }
    }

    dependencies
}
