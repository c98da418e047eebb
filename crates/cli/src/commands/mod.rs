//! CLI commands for Taskboard
//!
//! This module contains all subcommand implementations for the tb CLI.

pub mod blockers;
pub mod check;
pub mod cycles;
pub mod layout;
pub mod sort;

pub use blockers::BlockersCommand;
pub use check::CheckCommand;
pub use cycles::CyclesCommand;
pub use layout::LayoutCommand;
pub use sort::SortCommand;

use crate::error::CliError;
use crate::snapshot::Board;
use clap::Subcommand;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tasks with every blocker before the tasks it blocks
    Sort(SortCommand),

    /// Find circular dependencies in the stored data
    Cycles(CyclesCommand),

    /// Check whether a task may be blocked by another without creating a cycle
    Check(CheckCommand),

    /// Show what blocks a task and what it blocks
    Blockers(BlockersCommand),

    /// Compute the Gantt timeline layout
    Layout(LayoutCommand),
}

impl Command {
    /// Execute the command against the loaded board.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the command execution fails.
    pub fn execute(&self, board: &Board) -> Result<String, CliError> {
        match self {
            Command::Sort(cmd) => cmd.execute(board),
            Command::Cycles(cmd) => {
                let result = cmd.execute(board)?;
                Ok(result.to_string())
            }
            Command::Check(cmd) => {
                let result = cmd.execute(board)?;
                Ok(result.to_string())
            }
            Command::Blockers(cmd) => {
                let result = cmd.execute(board)?;
                Ok(result.to_string())
            }
            Command::Layout(cmd) => cmd.execute(board),
        }
    }
}
