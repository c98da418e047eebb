//! Blockers command for explaining why a task is blocked
//!
//! Implements the `tb blockers` command: the task's blocked status, its
//! unfinished direct blockers, the full transitive blocking chain, and the
//! tasks waiting on it.

use crate::error::CliError;
use crate::snapshot::Board;
use clap::Args;
use taskboard_core::{get_blocking_chain, get_dependents, get_incomplete_blockers};

/// Show what blocks a task and what it blocks
#[derive(Debug, Args)]
pub struct BlockersCommand {
    /// Task ID to inspect (case-insensitive)
    #[arg(required = true)]
    pub id: String,
}

/// A blocker as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockerInfo {
    pub id: String,
    pub title: String,
    pub status: String,
}

/// Result of the blockers command execution
#[derive(Debug)]
pub struct BlockersResult {
    pub task_id: String,
    pub task_title: String,
    /// Unfinished direct blockers
    pub incomplete: Vec<BlockerInfo>,
    /// Every transitive blocker, nearest first
    pub chain: Vec<String>,
    /// Tasks directly blocked by this one
    pub dependents: Vec<String>,
}

impl BlockersResult {
    /// Whether the task is currently blocked.
    pub fn is_blocked(&self) -> bool {
        !self.incomplete.is_empty()
    }
}

impl std::fmt::Display for BlockersResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.is_blocked() { "blocked" } else { "not blocked" };
        write!(f, "{} ({}): {}", self.task_id, self.task_title, state)?;

        if !self.incomplete.is_empty() {
            write!(f, "\n\nWaiting on:")?;
            for blocker in &self.incomplete {
                write!(f, "\n  {} [{}] {}", blocker.id, blocker.status, blocker.title)?;
            }
        }

        if !self.chain.is_empty() {
            write!(f, "\n\nBlocking chain: {}", self.chain.join(", "))?;
        }

        if !self.dependents.is_empty() {
            write!(f, "\n\nBlocks: {}", self.dependents.join(", "))?;
        }

        Ok(())
    }
}

impl BlockersCommand {
    /// Execute the blockers command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Board` if the task does not exist.
    pub fn execute(&self, board: &Board) -> Result<BlockersResult, CliError> {
        let task = board.task(&self.id)?;

        let incomplete = get_incomplete_blockers(task, &board.tasks)
            .into_iter()
            .map(|t| BlockerInfo {
                id: t.id.clone(),
                title: t.title.clone(),
                status: t.status.to_string(),
            })
            .collect();

        let dependents = get_dependents(&task.id, &board.tasks)
            .into_iter()
            .map(|t| t.id.clone())
            .collect();

        Ok(BlockersResult {
            task_id: task.id.clone(),
            task_title: task.title.clone(),
            incomplete,
            chain: get_blocking_chain(&task.id, &board.tasks),
            dependents,
        })
    }
}
