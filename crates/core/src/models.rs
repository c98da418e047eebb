//! Data models for Taskboard
//!
//! Defines the plain task and dependency records the engine consumes.
//! They mirror what the persistence layer stores; nothing here is
//! mutated by the graph or timeline code.

use crate::error::{BoardError, BoardResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Task status
///
/// Represents the current column of a task on the kanban board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Backlog,
    Todo,
    InProgress,
    Review,
    Done,
    Blocked,
}

impl Status {
    /// Returns the string representation used in stored records
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Backlog => "backlog",
            Status::Todo => "todo",
            Status::InProgress => "in_progress",
            Status::Review => "review",
            Status::Done => "done",
            Status::Blocked => "blocked",
        }
    }

    /// Whether a task in this status no longer blocks its dependents
    pub fn is_done(&self) -> bool {
        matches!(self, Status::Done)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Returns the string representation used in stored records
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A "blocked-by" relationship between two tasks.
///
/// `task_id` cannot be considered unblocked until `blocked_by_id`
/// reaches [`Status::Done`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// The task that waits
    pub task_id: String,
    /// The task it waits on
    pub blocked_by_id: String,
}

impl DependencyEdge {
    /// Create a new edge meaning `task_id` is blocked by `blocked_by_id`
    pub fn new(task_id: impl Into<String>, blocked_by_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            blocked_by_id: blocked_by_id.into(),
        }
    }

    /// Self-edges are never valid
    pub fn is_self_edge(&self) -> bool {
        self.task_id == self.blocked_by_id
    }
}

/// The date information a task carries, with the missing cases spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDates {
    /// Both start and due date are set
    Scheduled { start: NaiveDate, due: NaiveDate },
    /// Only a due date is set
    DueOnly(NaiveDate),
    /// Only a start date is set
    StartOnly(NaiveDate),
    /// No dates at all
    Unscheduled,
}

/// A task on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,

    /// Task title
    #[serde(default)]
    pub title: String,

    /// Current status
    pub status: Status,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Optional planned start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Ordering hint within a status column
    #[serde(default)]
    pub position: i32,

    /// Direct blocker edges for this task
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocked_by: Vec<DependencyEdge>,
}

impl Task {
    /// Create a new task in `todo` with default priority and no dates
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: Status::Todo,
            priority: Priority::default(),
            start_date: None,
            due_date: None,
            position: 0,
            blocked_by: Vec::new(),
        }
    }

    /// Set the status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the start date
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Set the position hint
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Add a direct blocker
    pub fn blocked_by(mut self, blocker_id: impl Into<String>) -> Self {
        let edge = DependencyEdge::new(self.id.clone(), blocker_id);
        self.blocked_by.push(edge);
        self
    }

    /// Ids of the direct blockers, in edge order
    pub fn blocker_ids(&self) -> impl Iterator<Item = &str> {
        self.blocked_by.iter().map(|e| e.blocked_by_id.as_str())
    }

    /// Classify which dates are present
    pub fn dates(&self) -> TaskDates {
        match (self.start_date, self.due_date) {
            (Some(start), Some(due)) => TaskDates::Scheduled { start, due },
            (None, Some(due)) => TaskDates::DueOnly(due),
            (Some(start), None) => TaskDates::StartOnly(start),
            (None, None) => TaskDates::Unscheduled,
        }
    }
}

/// Attach flat edge records to the tasks they belong to.
///
/// Edges whose `task_id` is not in `tasks` are dropped. Existing
/// `blocked_by` entries on the tasks are kept and new ones appended.
pub fn attach_dependencies(mut tasks: Vec<Task>, edges: Vec<DependencyEdge>) -> Vec<Task> {
    let index: HashMap<String, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.clone(), i))
        .collect();

    for edge in edges {
        match index.get(&edge.task_id) {
            Some(&i) => tasks[i].blocked_by.push(edge),
            None => debug!(
                task_id = %edge.task_id,
                blocked_by_id = %edge.blocked_by_id,
                "dropping edge for unknown task"
            ),
        }
    }

    tasks
}

/// Check that no two tasks share an id.
///
/// # Errors
///
/// Returns `BoardError::ValidationError` naming the first repeated id.
pub fn ensure_unique_ids(tasks: &[Task]) -> BoardResult<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    match tasks.iter().find(|t| !seen.insert(t.id.as_str())) {
        Some(task) => Err(BoardError::ValidationError {
            message: format!("Duplicate task id '{}'", task.id),
        }),
        None => Ok(()),
    }
}
