//! Check command for vetting a proposed dependency
//!
//! Implements the `tb check` command: runs the same validation a store would
//! run before committing "task is blocked by blocker", without writing
//! anything.

use crate::error::CliError;
use crate::snapshot::Board;
use clap::Args;
use taskboard_core::validate_new_dependency;

/// Check whether a task may be blocked by another task
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Task ID that would be blocked (case-insensitive)
    #[arg(required = true)]
    pub id: String,

    /// Task ID that would block it (case-insensitive)
    #[arg(long = "on", required = true)]
    pub blocker_id: String,
}

/// Result of the check command execution
#[derive(Debug)]
pub struct CheckResult {
    /// The task that would be blocked
    pub task_id: String,
    /// The proposed blocker
    pub blocker_id: String,
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OK: {} can be blocked by {}",
            self.task_id, self.blocker_id
        )
    }
}

impl CheckCommand {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Board` if:
    /// - Either task does not exist
    /// - The task would block itself
    /// - The dependency is already recorded
    /// - The dependency would close a cycle
    pub fn execute(&self, board: &Board) -> Result<CheckResult, CliError> {
        let task_id = board.task(&self.id)?.id.clone();
        let blocker_id = board.task(&self.blocker_id)?.id.clone();

        validate_new_dependency(&task_id, &blocker_id, &board.tasks)?;

        Ok(CheckResult {
            task_id,
            blocker_id,
        })
    }
}
