//! Visible window calculation

use super::{DateRange, local_today};
use crate::models::Task;
use chrono::{Duration, NaiveDate};

/// Days of padding before the earliest task date.
const LEADING_PADDING_DAYS: i64 = 7;
/// Days of padding after the latest task date.
const TRAILING_PADDING_DAYS: i64 = 14;
/// Days shown after today when no task has a date.
const EMPTY_TRAILING_DAYS: i64 = 30;

/// Work out the calendar window to render.
///
/// An explicit window is used verbatim. Otherwise the window spans every
/// start and due date in `tasks`, padded by 7 days before and 14 days
/// after. With no dates at all it runs from a week before `today` to 30
/// days after.
pub fn calculate_date_range(
    tasks: &[Task],
    explicit: Option<DateRange>,
    today: NaiveDate,
) -> DateRange {
    if let Some(range) = explicit {
        return range;
    }

    let dates = tasks
        .iter()
        .flat_map(|t| [t.start_date, t.due_date])
        .flatten();

    let bounds = dates.fold(None, |acc: Option<(NaiveDate, NaiveDate)>, d| match acc {
        Some((min, max)) => Some((min.min(d), max.max(d))),
        None => Some((d, d)),
    });

    match bounds {
        Some((min, max)) => DateRange {
            start: min - Duration::days(LEADING_PADDING_DAYS),
            end: max + Duration::days(TRAILING_PADDING_DAYS),
        },
        None => DateRange::around(today, LEADING_PADDING_DAYS, EMPTY_TRAILING_DAYS),
    }
}

/// [`calculate_date_range`] against the local clock.
pub fn calculate_date_range_now(tasks: &[Task], explicit: Option<DateRange>) -> DateRange {
    calculate_date_range(tasks, explicit, local_today())
}
