use std::path::PathBuf;
use taskboard_core::BoardError;
use thiserror::Error;

/// Error types for the Taskboard CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// Error from the graph or timeline engine
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The snapshot file could not be read
    #[error("Failed to read board snapshot at {path}: {source}")]
    ReadSnapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not valid board JSON
    #[error("Invalid board snapshot at {path}: {source}")]
    ParseSnapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output could not be serialized
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Argument combination the parser cannot catch
    #[error("{message}")]
    InvalidArgument { message: String },
}

impl CliError {
    /// Get the full error message, with a hint for corrupted dependency data.
    pub fn full_message(&self) -> String {
        match self {
            CliError::Board(err) if err.is_data_corruption() => format!(
                "{}\nhint: the stored dependencies contain a cycle; run `tb cycles` to locate it",
                err
            ),
            other => other.to_string(),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
