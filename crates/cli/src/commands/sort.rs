//! Sort command for printing tasks in dependency order
//!
//! Implements the `tb sort` command: every blocker is listed before the tasks
//! it blocks.

use crate::error::CliError;
use crate::output::format_task_table;
use crate::snapshot::Board;
use clap::Args;
use taskboard_core::topological_sort;

/// Print tasks so that blockers come before the tasks they block
#[derive(Debug, Args)]
pub struct SortCommand {
    /// Print only task IDs, one per line
    #[arg(long)]
    pub ids: bool,
}

impl SortCommand {
    /// Execute the sort command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Board` wrapping `BoardError::CyclicGraph` when the
    /// stored dependencies contain a cycle.
    pub fn execute(&self, board: &Board) -> Result<String, CliError> {
        let ordered = topological_sort(&board.tasks)?;

        if self.ids {
            return Ok(ordered
                .iter()
                .map(|t| t.id.as_str())
                .collect::<Vec<_>>()
                .join("\n"));
        }

        Ok(format_task_table(&ordered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use taskboard_core::{BoardError, Task};

    fn board(tasks: Vec<Task>) -> Board {
        Board::new(tasks, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn test_sort_ids_blockers_first() {
        let board = board(vec![
            Task::new("a", "A").blocked_by("b"),
            Task::new("b", "B").blocked_by("c"),
            Task::new("c", "C"),
        ]);
        let output = SortCommand { ids: true }.execute(&board).unwrap();
        assert_eq!(output, "c\nb\na");
    }

    #[test]
    fn test_sort_table() {
        let board = board(vec![Task::new("a", "Alpha").blocked_by("b"), Task::new("b", "Beta")]);
        let output = SortCommand { ids: false }.execute(&board).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[2].contains("Beta"));
        assert!(lines[3].contains("Alpha"));
    }

    #[test]
    fn test_sort_cycle_is_error() {
        let board = board(vec![
            Task::new("a", "A").blocked_by("b"),
            Task::new("b", "B").blocked_by("a"),
        ]);
        let err = SortCommand { ids: false }.execute(&board).unwrap_err();
        assert!(matches!(
            err,
            CliError::Board(BoardError::CyclicGraph { ordered: 0, total: 2 })
        ));
    }
}
