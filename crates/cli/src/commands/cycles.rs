//! Cycles command for locating circular dependencies

use crate::error::CliError;
use crate::snapshot::Board;
use clap::Args;
use taskboard_core::{Cycle, detect_cycles};

/// Report circular dependencies in the stored data
#[derive(Debug, Args)]
pub struct CyclesCommand {}

/// Result of the cycles command execution
#[derive(Debug)]
pub struct CyclesResult {
    pub cycles: Vec<Cycle>,
}

impl std::fmt::Display for CyclesResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cycles.is_empty() {
            return write!(f, "No dependency cycles found.");
        }

        write!(f, "Found {} dependency cycle(s):", self.cycles.len())?;
        for cycle in &self.cycles {
            write!(f, "\n  {}", cycle)?;
        }
        Ok(())
    }
}

impl CyclesCommand {
    /// Execute the cycles command.
    pub fn execute(&self, board: &Board) -> Result<CyclesResult, CliError> {
        Ok(CyclesResult {
            cycles: detect_cycles(&board.tasks),
        })
    }
}
