//! Gantt timeline layout
//!
//! Turns a task snapshot and a calendar window into positioned bars,
//! header columns and dependency arrows. Geometry is expressed in abstract
//! units scaled by the column width of the active zoom level; turning
//! units into pixels or terminal cells is left to the renderer.

mod bars;
mod columns;
mod edges;
mod layout;
mod range;

pub use bars::{BarGeometry, GanttTask, compute_bar, effective_span, sort_tasks_by_dependencies};
pub use columns::{DateColumn, generate_columns};
pub use edges::{GanttDependency, resolve_dependencies};
pub use layout::{GanttLayout, build_gantt_layout, build_gantt_layout_now};
pub use range::{calculate_date_range, calculate_date_range_now};

use crate::error::{BoardError, BoardResult};
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Today's date on the local clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Display granularity of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomLevel {
    /// One column per calendar day.
    #[default]
    Day,
    /// One column per Monday-based week.
    Week,
    /// One column per calendar month.
    Month,
}

impl ZoomLevel {
    /// Returns the string representation used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoomLevel::Day => "day",
            ZoomLevel::Week => "week",
            ZoomLevel::Month => "month",
        }
    }

    /// Days covered by one column for proportional bar math.
    ///
    /// Months are treated as 30 days.
    pub fn days_per_column(&self) -> f64 {
        match self {
            ZoomLevel::Day => 1.0,
            ZoomLevel::Week => 7.0,
            ZoomLevel::Month => 30.0,
        }
    }

    /// Smallest bar width drawn at this zoom level.
    pub fn min_bar_width(&self, column_width: f64) -> f64 {
        match self {
            ZoomLevel::Day => column_width,
            ZoomLevel::Week => column_width / 3.0,
            ZoomLevel::Month => column_width / 4.0,
        }
    }
}

impl std::fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ZoomLevel {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" => Ok(ZoomLevel::Day),
            "week" | "weeks" => Ok(ZoomLevel::Week),
            "month" | "months" => Ok(ZoomLevel::Month),
            other => Err(BoardError::ValidationError {
                message: format!(
                    "Invalid zoom level '{}'. Expected one of: day, week, month",
                    other
                ),
            }),
        }
    }
}

/// An inclusive calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a window, rejecting an end before the start.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidDateRange` if `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> BoardResult<Self> {
        if end < start {
            return Err(BoardError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A window padded around `anchor`.
    pub fn around(anchor: NaiveDate, before_days: i64, after_days: i64) -> Self {
        Self {
            start: anchor - Duration::days(before_days),
            end: anchor + Duration::days(after_days),
        }
    }

    /// Number of days from start to end (0 for a single-day window).
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether `date` falls inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Column widths per zoom level, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnWidths {
    pub day: f64,
    pub week: f64,
    pub month: f64,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            day: 40.0,
            week: 120.0,
            month: 200.0,
        }
    }
}

/// Configuration for Gantt layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GanttConfig {
    #[serde(default)]
    pub column_widths: ColumnWidths,
}

impl GanttConfig {
    /// Create the default layout configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the column width for one zoom level
    pub fn with_column_width(mut self, zoom: ZoomLevel, width: f64) -> Self {
        match zoom {
            ZoomLevel::Day => self.column_widths.day = width,
            ZoomLevel::Week => self.column_widths.week = width,
            ZoomLevel::Month => self.column_widths.month = width,
        }
        self
    }

    /// Column width for the given zoom level
    pub fn column_width(&self, zoom: ZoomLevel) -> f64 {
        match zoom {
            ZoomLevel::Day => self.column_widths.day,
            ZoomLevel::Week => self.column_widths.week,
            ZoomLevel::Month => self.column_widths.month,
        }
    }
}

#[cfg(test)]
pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
