//! Layout command for computing the Gantt timeline
//!
//! Implements the `tb layout` command. The default output is a table of bar
//! positions; `--json` emits the full layout for an external renderer.

use crate::error::CliError;
use crate::output::format_layout;
use crate::snapshot::Board;
use chrono::NaiveDate;
use clap::Args;
use taskboard_core::{DateRange, GanttConfig, GanttLayout, ZoomLevel, build_gantt_layout};

/// Compute bar positions and dependency arrows for the timeline
#[derive(Debug, Args)]
pub struct LayoutCommand {
    /// Zoom level (day, week, month)
    #[arg(long, short = 'z', default_value = "day")]
    pub zoom: ZoomLevel,

    /// First day of the window (YYYY-MM-DD); requires --to
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day of the window (YYYY-MM-DD); requires --from
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Override the column width in pixels for the chosen zoom
    #[arg(long)]
    pub column_width: Option<f64>,

    /// Emit the layout as JSON
    #[arg(long)]
    pub json: bool,
}

impl LayoutCommand {
    /// Explicit window from `--from`/`--to`, if given.
    fn window(&self) -> Result<Option<DateRange>, CliError> {
        match (self.from, self.to) {
            (Some(start), Some(end)) => Ok(Some(DateRange::new(start, end)?)),
            (None, None) => Ok(None),
            _ => Err(CliError::InvalidArgument {
                message: "--from and --to must be given together".to_string(),
            }),
        }
    }

    fn config(&self) -> Result<GanttConfig, CliError> {
        match self.column_width {
            Some(width) if !(width.is_finite() && width > 0.0) => Err(CliError::InvalidArgument {
                message: format!("--column-width must be a positive number, got {}", width),
            }),
            Some(width) => Ok(GanttConfig::new().with_column_width(self.zoom, width)),
            None => Ok(GanttConfig::new()),
        }
    }

    /// Build the layout without rendering it.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidArgument` for a half-open window or a
    /// non-positive column width, and `CliError::Board` wrapping
    /// `BoardError::InvalidDateRange` when `--to` is before `--from`.
    pub fn layout(&self, board: &Board) -> Result<GanttLayout, CliError> {
        let window = self.window()?;
        let config = self.config()?;
        Ok(build_gantt_layout(
            &board.tasks,
            self.zoom,
            window,
            &config,
            board.today,
        ))
    }

    /// Execute the layout command.
    pub fn execute(&self, board: &Board) -> Result<String, CliError> {
        let layout = self.layout(board)?;

        if self.json {
            return Ok(serde_json::to_string_pretty(&layout)?);
        }

        Ok(format_layout(&layout))
    }
}
