//! End-to-end integration tests for the Taskboard CLI
//!
//! This test suite loads board snapshots from disk and executes commands
//! through the CLI command interface. Each test writes its own snapshot into
//! an isolated temp directory.
//!
//! Tests are organized into modules:
//! - `loading` - Snapshot parsing and error reporting
//! - `ordering` - Sort and cycle commands
//! - `dependencies` - Check and blockers commands
//! - `timeline` - Layout command

mod common;

use common::*;
use serde_json::json;
use taskboard_cli::commands::{
    BlockersCommand, CheckCommand, Command, CyclesCommand, LayoutCommand, SortCommand,
};
use taskboard_cli::{Board, CliError};
use taskboard_core::{BoardError, ZoomLevel};

fn layout_cmd(zoom: ZoomLevel) -> LayoutCommand {
    LayoutCommand {
        zoom,
        from: None,
        to: None,
        column_width: None,
        json: false,
    }
}

// =============================================================================
// LOADING TESTS
// =============================================================================

mod loading {
    use super::*;

    #[test]
    fn test_flat_edges_are_attached() {
        let ctx = TestContext::new(&release_snapshot());
        let board = ctx.board();

        assert_eq!(board.tasks.len(), 5);
        let launch = board.task("launch").unwrap();
        let blockers: Vec<&str> = launch.blocker_ids().collect();
        assert_eq!(blockers, vec!["ui", "docs"]);
    }

    #[test]
    fn test_edges_for_unknown_tasks_are_dropped() {
        let ctx = TestContext::new(&json!({
            "tasks": [{"id": "a", "status": "todo"}],
            "dependencies": [{"task_id": "ghost", "blocked_by_id": "a"}]
        }));
        let board = ctx.board();
        assert!(board.tasks[0].blocked_by.is_empty());
    }

    #[test]
    fn test_invalid_snapshot_reports_path() {
        let ctx = TestContext::new(&json!({"tasks": [{"id": "a", "status": "sleeping"}]}));
        let err = Board::load(&ctx.board_path, today()).unwrap_err();
        assert!(matches!(err, CliError::ParseSnapshot { .. }));
        assert!(err.to_string().contains("board.json"));
    }

    #[test]
    fn test_duplicate_task_ids_fail_to_load() {
        let ctx = TestContext::new(&json!({
            "tasks": [
                {"id": "a", "title": "First", "status": "todo"},
                {"id": "a", "title": "Second", "status": "todo"},
                {"id": "b", "title": "B", "status": "todo"}
            ],
            "dependencies": [{"task_id": "a", "blocked_by_id": "b"}]
        }));
        let err = Board::load(&ctx.board_path, today()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Board(BoardError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_missing_snapshot() {
        let ctx = TestContext::new(&json!({}));
        let err = Board::load(&ctx.temp_dir.join("other.json"), today()).unwrap_err();
        assert!(matches!(err, CliError::ReadSnapshot { .. }));
    }

    #[test]
    fn test_empty_snapshot_loads() {
        let ctx = TestContext::new(&json!({}));
        assert!(ctx.board().tasks.is_empty());
    }
}

// =============================================================================
// ORDERING TESTS
// =============================================================================

mod ordering {
    use super::*;

    #[test]
    fn test_sort_puts_blockers_first() {
        let ctx = TestContext::new(&release_snapshot());
        let output = SortCommand { ids: true }.execute(&ctx.board()).unwrap();
        assert_eq!(output, "schema\ndocs\napi\nui\nlaunch");
    }

    #[test]
    fn test_sort_on_cyclic_board_fails_with_hint() {
        let ctx = TestContext::new(&cyclic_snapshot());
        let err = Command::Sort(SortCommand { ids: false })
            .execute(&ctx.board())
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::Board(BoardError::CyclicGraph { ordered: 0, total: 3 })
        ));
        assert!(err.full_message().contains("tb cycles"));
    }

    #[test]
    fn test_cycles_reports_loop() {
        let ctx = TestContext::new(&cyclic_snapshot());
        let result = CyclesCommand {}.execute(&ctx.board()).unwrap();

        assert_eq!(result.cycles.len(), 1);
        assert_eq!(result.cycles[0].to_string(), "a -> b -> c -> a");
    }

    #[test]
    fn test_cycles_clean_board() {
        let ctx = TestContext::new(&release_snapshot());
        let output = Command::Cycles(CyclesCommand {})
            .execute(&ctx.board())
            .unwrap();
        assert_eq!(output, "No dependency cycles found.");
    }
}

// =============================================================================
// DEPENDENCY TESTS
// =============================================================================

mod dependencies {
    use super::*;

    fn check(id: &str, on: &str) -> CheckCommand {
        CheckCommand {
            id: id.to_string(),
            blocker_id: on.to_string(),
        }
    }

    #[test]
    fn test_check_accepts_new_edge() {
        let ctx = TestContext::new(&release_snapshot());
        let result = check("docs", "schema").execute(&ctx.board()).unwrap();
        assert_eq!(result.to_string(), "OK: docs can be blocked by schema");
    }

    #[test]
    fn test_check_rejects_cycle_with_readable_path() {
        let ctx = TestContext::new(&release_snapshot());
        let err = check("schema", "launch").execute(&ctx.board()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "this would create a circular dependency: launch -> ui -> api -> schema"
        );
    }

    #[test]
    fn test_check_rejects_existing_edge() {
        let ctx = TestContext::new(&release_snapshot());
        let err = check("UI", "api").execute(&ctx.board()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Board(BoardError::DuplicateDependency { .. })
        ));
    }

    #[test]
    fn test_blockers_of_launch() {
        let ctx = TestContext::new(&release_snapshot());
        let result = BlockersCommand {
            id: "launch".to_string(),
        }
        .execute(&ctx.board())
        .unwrap();

        assert!(result.is_blocked());
        let waiting: Vec<&str> = result.incomplete.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(waiting, vec!["ui", "docs"]);
        assert_eq!(result.chain, vec!["ui", "docs", "api", "schema"]);
    }

    #[test]
    fn test_ui_is_not_blocked_once_api_is_done() {
        let ctx = TestContext::new(&release_snapshot());
        let result = BlockersCommand { id: "ui".to_string() }
            .execute(&ctx.board())
            .unwrap();

        assert!(!result.is_blocked());
        assert_eq!(result.chain, vec!["api", "schema"]);
        assert_eq!(result.dependents, vec!["launch"]);
    }
}

// =============================================================================
// TIMELINE TESTS
// =============================================================================

mod timeline {
    use super::*;

    #[test]
    fn test_day_layout_geometry() {
        let ctx = TestContext::new(&release_snapshot());
        let layout = layout_cmd(ZoomLevel::Day).layout(&ctx.board()).unwrap();

        let rows: Vec<&str> = layout.tasks.iter().map(|g| g.task.id.as_str()).collect();
        assert_eq!(rows, vec!["schema", "api", "ui", "docs", "launch"]);

        assert_eq!(layout.range.start.to_string(), "2024-02-23");
        assert_eq!(layout.range.end.to_string(), "2024-04-03");
        assert_eq!(layout.columns.len(), 41);
        assert_eq!(layout.total_width, 1640.0);

        let geometry: Vec<(f64, f64)> = layout
            .tasks
            .iter()
            .map(|g| (g.bar_left, g.bar_width))
            .collect();
        assert_eq!(
            geometry,
            vec![
                (280.0, 120.0),
                (400.0, 160.0),
                (560.0, 280.0),
                (440.0, 40.0),
                (1040.0, 40.0),
            ]
        );
    }

    #[test]
    fn test_layout_dependency_arrows() {
        let ctx = TestContext::new(&release_snapshot());
        let layout = layout_cmd(ZoomLevel::Day).layout(&ctx.board()).unwrap();

        assert_eq!(layout.dependencies.len(), 4);
        for dep in &layout.dependencies {
            let (from, to) = layout.endpoints(dep).unwrap();
            assert_eq!(from.task.id, dep.blocked_by_id);
            assert_eq!(to.task.id, dep.task_id);
            assert!(dep.blocked_by_row < dep.task_row);
        }

        let pending: Vec<&str> = layout
            .dependencies
            .iter()
            .filter(|d| !d.is_complete)
            .map(|d| d.blocked_by_id.as_str())
            .collect();
        assert_eq!(pending.len(), 2);
        assert!(pending.contains(&"ui"));
        assert!(pending.contains(&"docs"));
    }

    #[test]
    fn test_month_layout_minimum_width() {
        let ctx = TestContext::new(&release_snapshot());
        let layout = layout_cmd(ZoomLevel::Month).layout(&ctx.board()).unwrap();

        assert_eq!(layout.column_width, 200.0);
        assert!(layout.tasks.iter().all(|g| g.bar_width >= 50.0));
        assert_eq!(layout.columns.first().unwrap().label, "Feb 2024");
    }

    #[test]
    fn test_layout_on_cyclic_board_still_renders() {
        let ctx = TestContext::new(&cyclic_snapshot());
        let output = Command::Layout(layout_cmd(ZoomLevel::Week))
            .execute(&ctx.board())
            .unwrap();
        assert!(output.contains("Dependencies:"));
    }

    #[test]
    fn test_layout_json() {
        let ctx = TestContext::new(&release_snapshot());
        let mut cmd = layout_cmd(ZoomLevel::Week);
        cmd.json = true;

        let output = cmd.execute(&ctx.board()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["zoom"], "week");
        assert_eq!(value["column_width"], 120.0);
        assert_eq!(value["tasks"].as_array().unwrap().len(), 5);
    }
}
