//! Test infrastructure for integration tests
//!
//! Provides isolated snapshot files and board loading helpers. Each test gets
//! its own temp directory to ensure no shared state.

use chrono::NaiveDate;
use serde_json::{Value, json};
use std::path::PathBuf;
use taskboard_cli::Board;

/// Test context owning a temp directory with a board snapshot
pub struct TestContext {
    pub temp_dir: PathBuf,
    pub board_path: PathBuf,
}

impl TestContext {
    /// Create a new test context and write `snapshot` as its board file.
    ///
    /// The temp directory name uses process ID, thread ID, and nanosecond
    /// timestamp to guarantee isolation.
    pub fn new(snapshot: &Value) -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "tb-integration-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&temp_dir).unwrap();

        let board_path = temp_dir.join("board.json");
        std::fs::write(&board_path, serde_json::to_string_pretty(snapshot).unwrap()).unwrap();

        Self {
            temp_dir,
            board_path,
        }
    }

    /// Load the board with a fixed "today".
    pub fn board(&self) -> Board {
        Board::load(&self.board_path, today()).unwrap()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

/// Fixed reference date used by every integration test.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

/// A release board: schema -> api -> ui -> launch, docs alongside.
///
/// Edges are stored as flat dependency records, the way the board exports
/// them.
pub fn release_snapshot() -> Value {
    json!({
        "tasks": [
            {"id": "launch", "title": "Launch", "status": "todo",
             "due_date": "2024-03-20"},
            {"id": "ui", "title": "Build UI", "status": "in_progress",
             "start_date": "2024-03-08", "due_date": "2024-03-15"},
            {"id": "api", "title": "Build API", "status": "done",
             "start_date": "2024-03-04", "due_date": "2024-03-08"},
            {"id": "schema", "title": "Design schema", "status": "done",
             "start_date": "2024-03-01", "due_date": "2024-03-04"},
            {"id": "docs", "title": "Write docs", "status": "backlog"}
        ],
        "dependencies": [
            {"task_id": "launch", "blocked_by_id": "ui"},
            {"task_id": "launch", "blocked_by_id": "docs"},
            {"task_id": "ui", "blocked_by_id": "api"},
            {"task_id": "api", "blocked_by_id": "schema"}
        ]
    })
}

/// A board whose stored edges already contain a loop.
pub fn cyclic_snapshot() -> Value {
    json!({
        "tasks": [
            {"id": "a", "title": "A", "status": "todo"},
            {"id": "b", "title": "B", "status": "todo"},
            {"id": "c", "title": "C", "status": "todo"}
        ],
        "dependencies": [
            {"task_id": "a", "blocked_by_id": "b"},
            {"task_id": "b", "blocked_by_id": "c"},
            {"task_id": "c", "blocked_by_id": "a"}
        ]
    })
}
