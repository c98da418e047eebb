//! Header column generation for day, week and month zoom

use super::{DateRange, ZoomLevel};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// A single column in the timeline header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateColumn {
    /// First day the column covers.
    pub date: NaiveDate,
    /// Last day the column covers (same as `date` at day zoom).
    pub end: NaiveDate,
    /// Label to display for this column.
    pub label: String,
    /// Whether today falls inside the column.
    pub is_today: bool,
    /// Saturday or Sunday; always false above day zoom.
    pub is_weekend: bool,
}

/// Generate the header columns covering `range` at the given zoom level.
///
/// Columns are contiguous and increasing. Week and month columns include
/// any period that overlaps the window, so the first and last may extend
/// past it. An inverted window yields no columns.
pub fn generate_columns(range: DateRange, zoom: ZoomLevel, today: NaiveDate) -> Vec<DateColumn> {
    if range.end < range.start {
        return Vec::new();
    }

    match zoom {
        ZoomLevel::Day => day_columns(range, today),
        ZoomLevel::Week => week_columns(range, today),
        ZoomLevel::Month => month_columns(range, today),
    }
}

fn day_columns(range: DateRange, today: NaiveDate) -> Vec<DateColumn> {
    range
        .start
        .iter_days()
        .take_while(|d| *d <= range.end)
        .map(|date| DateColumn {
            date,
            end: date,
            label: date.day().to_string(),
            is_today: date == today,
            is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        })
        .collect()
}

fn week_columns(range: DateRange, today: NaiveDate) -> Vec<DateColumn> {
    let mut columns = Vec::new();

    // Monday on or before the window start
    let offset = range.start.weekday().num_days_from_monday() as i64;
    let mut week_start = range.start - Duration::days(offset);

    while week_start <= range.end {
        let week_end = week_start + Duration::days(6);
        columns.push(DateColumn {
            date: week_start,
            end: week_end,
            label: format!("W{}", week_start.iso_week().week()),
            is_today: week_start <= today && today <= week_end,
            is_weekend: false,
        });
        week_start += Duration::days(7);
    }

    columns
}

/// First day of the month after the one containing `date`.
fn next_month_start(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

fn month_columns(range: DateRange, today: NaiveDate) -> Vec<DateColumn> {
    let mut columns = Vec::new();
    let mut month_start = range.start.with_day(1);

    while let Some(start) = month_start.filter(|s| *s <= range.end) {
        let next = next_month_start(start);
        let end = next.and_then(|n| n.pred_opt()).unwrap_or(start);
        columns.push(DateColumn {
            date: start,
            end,
            label: start.format("%b %Y").to_string(),
            is_today: start <= today && today <= end,
            is_weekend: false,
        });
        month_start = next;
    }

    columns
}
