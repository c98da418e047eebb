//! End-to-end Gantt layout assembly

use super::{
    DateColumn, DateRange, GanttConfig, GanttDependency, GanttTask, ZoomLevel,
    calculate_date_range, compute_bar, effective_span, generate_columns, local_today,
    resolve_dependencies, sort_tasks_by_dependencies,
};
use crate::models::{Task, ensure_unique_ids};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

/// Everything a renderer needs to draw the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GanttLayout {
    /// Placed tasks in row order.
    pub tasks: Vec<GanttTask>,
    /// Arrows between placed tasks.
    pub dependencies: Vec<GanttDependency>,
    /// Header columns.
    pub columns: Vec<DateColumn>,
    /// Width of the whole timeline (columns x column width).
    pub total_width: f64,
    /// Width of one column.
    pub column_width: f64,
    /// The rendered window.
    pub range: DateRange,
    pub zoom: ZoomLevel,
}

impl GanttLayout {
    /// Look up the placed task by id.
    pub fn task(&self, task_id: &str) -> Option<&GanttTask> {
        self.tasks.iter().find(|g| g.task.id == task_id)
    }

    /// The (blocker, blocked) bars an arrow connects.
    pub fn endpoints(&self, dependency: &GanttDependency) -> Option<(&GanttTask, &GanttTask)> {
        let from = self.tasks.get(dependency.blocked_by_row)?;
        let to = self.tasks.get(dependency.task_row)?;
        Some((from, to))
    }

    /// Column index containing today, if it is on screen.
    pub fn today_column(&self) -> Option<usize> {
        self.columns.iter().position(|c| c.is_today)
    }
}

/// Lay out `tasks` on a timeline.
///
/// A pure function of its inputs: the window comes from
/// [`calculate_date_range`], rows from [`sort_tasks_by_dependencies`], bars
/// from [`compute_bar`] and arrows from [`resolve_dependencies`]. The row
/// ordering is a display aid only; cyclic data still lays out.
///
/// Task ids are expected to be unique (see [`ensure_unique_ids`]). When an
/// id repeats, only its first record gets a row and a warning is logged.
pub fn build_gantt_layout(
    tasks: &[Task],
    zoom: ZoomLevel,
    window: Option<DateRange>,
    config: &GanttConfig,
    today: NaiveDate,
) -> GanttLayout {
    if let Err(err) = ensure_unique_ids(tasks) {
        warn!(error = %err, "laying out the first record of each repeated id");
    }

    let range = calculate_date_range(tasks, window, today);
    let columns = generate_columns(range, zoom, today);
    let column_width = config.column_width(zoom);

    let placed: Vec<GanttTask> = sort_tasks_by_dependencies(tasks)
        .into_iter()
        .enumerate()
        .map(|(row, task)| {
            let bar = compute_bar(effective_span(task, today), range.start, zoom, column_width);
            GanttTask {
                task: task.clone(),
                bar_left: bar.left,
                bar_width: bar.width,
                row,
            }
        })
        .collect();

    let dependencies = resolve_dependencies(&placed);
    let total_width = columns.len() as f64 * column_width;

    debug!(
        tasks = placed.len(),
        dependencies = dependencies.len(),
        columns = columns.len(),
        zoom = %zoom,
        start = %range.start,
        end = %range.end,
        "assembled gantt layout"
    );

    GanttLayout {
        tasks: placed,
        dependencies,
        columns,
        total_width,
        column_width,
        range,
        zoom,
    }
}

/// [`build_gantt_layout`] against the local clock.
pub fn build_gantt_layout_now(
    tasks: &[Task],
    zoom: ZoomLevel,
    window: Option<DateRange>,
    config: &GanttConfig,
) -> GanttLayout {
    build_gantt_layout(tasks, zoom, window, config, local_today())
}
