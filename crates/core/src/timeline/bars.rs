//! Bar placement and default row ordering

use super::ZoomLevel;
use crate::graph::DependencyGraph;
use crate::models::{Task, TaskDates};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Horizontal geometry of one bar, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarGeometry {
    pub left: f64,
    pub width: f64,
}

/// A task placed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GanttTask {
    pub task: Task,
    pub bar_left: f64,
    pub bar_width: f64,
    /// Row index in the default dependency ordering.
    pub row: usize,
}

impl GanttTask {
    /// Right edge of the bar.
    pub fn bar_right(&self) -> f64 {
        self.bar_left + self.bar_width
    }
}

/// The (start, end) dates a task's bar covers.
///
/// Tasks missing one or both dates fall back to a one-day span:
/// - due date only: the due date's own day
/// - start date only: the start date's own day
/// - no dates: today
pub fn effective_span(task: &Task, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let one_day = Duration::days(1);
    match task.dates() {
        TaskDates::Scheduled { start, due } => (start, due),
        TaskDates::DueOnly(due) => (due, due + one_day),
        TaskDates::StartOnly(start) => (start, start + one_day),
        TaskDates::Unscheduled => (today, today + one_day),
    }
}

/// Place a span within a window starting at `window_start`.
///
/// The left edge is the offset from the window start scaled by the days a
/// column covers at `zoom`, clamped so bars starting before the window sit
/// flush with its left edge. Width never drops below
/// [`ZoomLevel::min_bar_width`].
pub fn compute_bar(
    span: (NaiveDate, NaiveDate),
    window_start: NaiveDate,
    zoom: ZoomLevel,
    column_width: f64,
) -> BarGeometry {
    let (start, end) = span;
    let days_from_start = (start - window_start).num_days() as f64;
    let span_days = (end - start).num_days() as f64;
    let per_column = zoom.days_per_column();

    let left = (days_from_start / per_column * column_width).max(0.0);
    let width = (span_days / per_column * column_width).max(zoom.min_bar_width(column_width));

    BarGeometry { left, width }
}

/// Per-call DFS state for [`sort_tasks_by_dependencies`].
struct RowOrder<'g, 'a> {
    graph: &'g DependencyGraph<'a>,
    by_id: HashMap<&'a str, &'a Task>,
    visited: HashSet<&'a str>,
    ordered: Vec<&'a Task>,
}

impl<'g, 'a> RowOrder<'g, 'a> {
    fn visit(&mut self, id: &'a str) {
        let Some(&task) = self.by_id.get(id) else {
            return;
        };
        if !self.visited.insert(id) {
            return;
        }

        let graph = self.graph;
        for &blocker in graph.blockers_of(id) {
            self.visit(blocker);
        }
        self.ordered.push(task);
    }
}

/// Default Gantt row order: each task after its direct blockers.
///
/// Best effort. Cycles are not rejected here; the visited guard means a
/// cyclic input still yields every task exactly once, but the order need
/// not respect the edges inside the loop. Blockers missing from `tasks`
/// are skipped.
pub fn sort_tasks_by_dependencies(tasks: &[Task]) -> Vec<&Task> {
    let graph = DependencyGraph::build(tasks);
    let mut by_id = HashMap::with_capacity(tasks.len());
    for task in tasks {
        by_id.entry(task.id.as_str()).or_insert(task);
    }

    let mut order = RowOrder {
        graph: &graph,
        by_id,
        visited: HashSet::new(),
        ordered: Vec::with_capacity(tasks.len()),
    };

    for &id in graph.task_ids() {
        order.visit(id);
    }

    order.ordered
}
