use chrono::NaiveDate;
use thiserror::Error;

/// Error types for Taskboard graph and timeline operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A task was asked to block itself
    #[error("Task '{task_id}' cannot depend on itself")]
    SelfDependency { task_id: String },

    /// Committing the proposed edge would close a loop
    #[error("this would create a circular dependency: {}", path.join(" -> "))]
    CircularDependency {
        task_id: String,
        blocked_by_id: String,
        /// Existing path from the proposed blocker back to the task
        path: Vec<String>,
    },

    /// A cycle is already present in the stored edges
    #[error(
        "Dependency data contains a cycle: only {ordered} of {total} tasks could be ordered"
    )]
    CyclicGraph { ordered: usize, total: usize },

    /// Error when a requested task was not found
    #[error("Task '{task_id}' not found")]
    TaskNotFound { task_id: String },

    /// The edge is already recorded
    #[error("Dependency already exists: {task_id} -> {blocked_by_id}")]
    DuplicateDependency {
        task_id: String,
        blocked_by_id: String,
    },

    /// Window end falls before its start
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Error for invalid input or validation failure
    #[error("{message}")]
    ValidationError { message: String },
}

impl BoardError {
    /// Whether this error points at corrupted stored data rather than bad input.
    ///
    /// A cycle found while sorting means one slipped past the commit-time
    /// gate, so callers should surface it differently from a rejected edge.
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, BoardError::CyclicGraph { .. })
    }
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
