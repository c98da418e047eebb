//! Core engine for Taskboard
//!
//! Pure, synchronous logic behind the board's dependency tracking and Gantt
//! timeline: building the blocked-by graph, rejecting cyclic edges,
//! resolving blocked status, ordering tasks, and laying tasks out on a
//! calendar. No I/O happens here; callers hand in task snapshots and get
//! plain data back.

pub mod error;
pub mod graph;
pub mod models;
pub mod timeline;

pub use error::{BoardError, BoardResult};
pub use graph::{
    Cycle, DependencyGraph, detect_cycles, format_cycle_path, get_blocking_chain, get_dependents,
    get_incomplete_blockers, is_task_blocked, topological_sort, validate_new_dependency,
    would_create_cycle,
};
pub use models::{
    DependencyEdge, Priority, Status, Task, TaskDates, attach_dependencies, ensure_unique_ids,
};
pub use timeline::{
    BarGeometry, ColumnWidths, DateColumn, DateRange, GanttConfig, GanttDependency, GanttLayout,
    GanttTask, ZoomLevel, build_gantt_layout, build_gantt_layout_now, calculate_date_range,
    calculate_date_range_now, compute_bar, effective_span, generate_columns, local_today,
    resolve_dependencies, sort_tasks_by_dependencies,
};

// Layouts are handed across render threads
static_assertions::assert_impl_all!(GanttLayout: Send, Sync);
static_assertions::assert_impl_all!(Task: Send, Sync);
static_assertions::assert_impl_all!(BoardError: Send, Sync);
