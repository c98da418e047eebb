//! Board snapshot loading
//!
//! A snapshot is the JSON export of the board's persistence layer: task
//! records plus flat dependency-edge records. Edges may also be embedded on
//! each task as `blocked_by`.

use crate::error::{CliError, CliResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use taskboard_core::{BoardError, DependencyEdge, Task, attach_dependencies, ensure_unique_ids};
use tracing::debug;

/// On-disk snapshot format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub dependencies: Vec<DependencyEdge>,
}

impl BoardSnapshot {
    /// Read and parse a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `CliError::ReadSnapshot` if the file cannot be read.
    /// Returns `CliError::ParseSnapshot` if it is not valid snapshot JSON.
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::ReadSnapshot {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&raw).map_err(|e| CliError::ParseSnapshot {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse snapshot JSON.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Tasks with the flat edge records attached.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::ValidationError` if two tasks share an id.
    pub fn into_tasks(self) -> CliResult<Vec<Task>> {
        ensure_unique_ids(&self.tasks)?;
        debug!(
            tasks = self.tasks.len(),
            edges = self.dependencies.len(),
            "loaded board snapshot"
        );
        Ok(attach_dependencies(self.tasks, self.dependencies))
    }
}

/// The loaded board plus the date treated as "today".
#[derive(Debug, Clone)]
pub struct Board {
    pub tasks: Vec<Task>,
    pub today: NaiveDate,
}

impl Board {
    /// Create a board from tasks
    pub fn new(tasks: Vec<Task>, today: NaiveDate) -> Self {
        Self { tasks, today }
    }

    /// Load a board from a snapshot file
    pub fn load(path: &Path, today: NaiveDate) -> CliResult<Self> {
        Ok(Self::new(BoardSnapshot::load(path)?.into_tasks()?, today))
    }

    /// Find a task by id (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `BoardError::TaskNotFound` if no task matches.
    pub fn task(&self, id: &str) -> CliResult<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| {
                BoardError::TaskNotFound {
                    task_id: id.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_with_flat_edges() {
        let snapshot = BoardSnapshot::parse(
            r#"{
                "tasks": [
                    {"id": "a", "title": "Alpha", "status": "todo"},
                    {"id": "b", "title": "Beta", "status": "done"}
                ],
                "dependencies": [{"task_id": "a", "blocked_by_id": "b"}]
            }"#,
        )
        .unwrap();

        let tasks = snapshot.into_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].blocked_by, vec![DependencyEdge::new("a", "b")]);
    }

    #[test]
    fn test_parse_with_embedded_edges() {
        let snapshot = BoardSnapshot::parse(
            r#"{"tasks": [{"id": "a", "status": "todo",
                "blocked_by": [{"task_id": "a", "blocked_by_id": "b"}]}]}"#,
        )
        .unwrap();
        assert!(snapshot.dependencies.is_empty());
        assert_eq!(snapshot.into_tasks().unwrap()[0].blocked_by.len(), 1);
    }

    #[test]
    fn test_duplicate_task_ids_rejected() {
        let snapshot = BoardSnapshot::parse(
            r#"{
                "tasks": [
                    {"id": "a", "title": "First", "status": "todo"},
                    {"id": "a", "title": "Second", "status": "todo"},
                    {"id": "b", "title": "Beta", "status": "done"}
                ],
                "dependencies": [{"task_id": "a", "blocked_by_id": "b"}]
            }"#,
        )
        .unwrap();

        let err = snapshot.into_tasks().unwrap_err();
        assert!(matches!(
            err,
            CliError::Board(BoardError::ValidationError { .. })
        ));
        assert_eq!(err.to_string(), "Duplicate task id 'a'");
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(BoardSnapshot::parse("{not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let path = env::temp_dir().join(format!("tb-missing-{}/board.json", std::process::id()));
        let err = BoardSnapshot::load(&path).unwrap_err();
        assert!(matches!(err, CliError::ReadSnapshot { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let path = env::temp_dir().join(format!(
            "tb-invalid-{}-{:?}.json",
            std::process::id(),
            std::thread::current().id()
        ));
        std::fs::write(&path, "[1, 2").unwrap();

        let err = BoardSnapshot::load(&path).unwrap_err();
        assert!(matches!(err, CliError::ParseSnapshot { .. }));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_board_task_lookup_case_insensitive() {
        let board = Board::new(vec![Task::new("abc", "Alpha")], date(2024, 3, 1));
        assert_eq!(board.task("ABC").unwrap().title, "Alpha");
        assert!(board.task("zzz").is_err());
    }
}
