//! Output formatting module for Taskboard
//!
//! Provides table formatting for task orderings and Gantt layouts.

use taskboard_core::{GanttLayout, Task};

/// Maximum width for the title column before truncation
const MAX_TITLE_WIDTH: usize = 30;

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Width of the widest value in a column, never narrower than its header.
fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

/// Format tasks into an aligned, numbered table.
///
/// Produces output in the format:
/// ```text
/// #  ID  Status       Title
/// -  --  -----------  ------------
/// 1  c   done         Write schema
/// ```
pub fn format_task_table(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let headers = ["#", "ID", "Status", "Title"];
    let titles: Vec<String> = tasks
        .iter()
        .map(|t| truncate(&t.title, MAX_TITLE_WIDTH))
        .collect();

    let num_width = tasks.len().to_string().len().max(headers[0].len());
    let id_width = column_width(headers[1], tasks.iter().map(|t| t.id.as_str()));
    let status_width = column_width(headers[2], tasks.iter().map(|t| t.status.as_str()));
    let title_width = column_width(headers[3], titles.iter().map(String::as_str));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<num_w$}  {:<id_w$}  {:<status_w$}  {}\n",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        num_w = num_width,
        id_w = id_width,
        status_w = status_width,
    ));
    output.push_str(&format!(
        "{:-<num_w$}  {:-<id_w$}  {:-<status_w$}  {:-<title_w$}\n",
        "",
        "",
        "",
        "",
        num_w = num_width,
        id_w = id_width,
        status_w = status_width,
        title_w = title_width,
    ));

    for (i, (task, title)) in tasks.iter().zip(&titles).enumerate() {
        output.push_str(&format!(
            "{:<num_w$}  {:<id_w$}  {:<status_w$}  {}\n",
            i + 1,
            task.id,
            task.status.as_str(),
            title,
            num_w = num_width,
            id_w = id_width,
            status_w = status_width,
        ));
    }

    output.trim_end().to_string()
}

/// Format a Gantt layout as a bar table followed by its dependency arrows.
///
/// Produces output in the format:
/// ```text
/// Window 2024-03-01 to 2024-03-31 (day zoom, 31 columns x 40 = 1240)
///
/// Row  ID  Status  Left   Width  Title
/// ---  --  ------  -----  -----  -----
/// 0    b   done    120.0  160.0  Build
///
/// Dependencies:
///   b -> a (complete)
/// ```
pub fn format_layout(layout: &GanttLayout) -> String {
    let mut output = format!(
        "Window {} to {} ({} zoom, {} columns x {} = {})\n",
        layout.range.start,
        layout.range.end,
        layout.zoom,
        layout.columns.len(),
        layout.column_width,
        layout.total_width,
    );

    if layout.tasks.is_empty() {
        output.push_str("\nNo tasks found.");
        return output;
    }

    let headers = ["Row", "ID", "Status", "Left", "Width", "Title"];
    let lefts: Vec<String> = layout
        .tasks
        .iter()
        .map(|g| format!("{:.1}", g.bar_left))
        .collect();
    let widths: Vec<String> = layout
        .tasks
        .iter()
        .map(|g| format!("{:.1}", g.bar_width))
        .collect();
    let titles: Vec<String> = layout
        .tasks
        .iter()
        .map(|g| truncate(&g.task.title, MAX_TITLE_WIDTH))
        .collect();
    let rows: Vec<String> = layout.tasks.iter().map(|g| g.row.to_string()).collect();

    let row_w = column_width(headers[0], rows.iter().map(String::as_str));
    let id_w = column_width(headers[1], layout.tasks.iter().map(|g| g.task.id.as_str()));
    let status_w = column_width(
        headers[2],
        layout.tasks.iter().map(|g| g.task.status.as_str()),
    );
    let left_w = column_width(headers[3], lefts.iter().map(String::as_str));
    let width_w = column_width(headers[4], widths.iter().map(String::as_str));
    let title_w = column_width(headers[5], titles.iter().map(String::as_str));

    output.push('\n');
    output.push_str(&format!(
        "{:<row_w$}  {:<id_w$}  {:<status_w$}  {:<left_w$}  {:<width_w$}  {}\n",
        headers[0], headers[1], headers[2], headers[3], headers[4], headers[5],
    ));
    output.push_str(&format!(
        "{:-<row_w$}  {:-<id_w$}  {:-<status_w$}  {:-<left_w$}  {:-<width_w$}  {:-<title_w$}\n",
        "", "", "", "", "", "",
    ));

    for (i, gantt) in layout.tasks.iter().enumerate() {
        output.push_str(&format!(
            "{:<row_w$}  {:<id_w$}  {:<status_w$}  {:<left_w$}  {:<width_w$}  {}\n",
            rows[i],
            gantt.task.id,
            gantt.task.status.as_str(),
            lefts[i],
            widths[i],
            titles[i],
        ));
    }

    if !layout.dependencies.is_empty() {
        output.push_str("\nDependencies:\n");
        for dep in &layout.dependencies {
            let state = if dep.is_complete { "complete" } else { "pending" };
            output.push_str(&format!(
                "  {} -> {} ({})\n",
                dep.blocked_by_id, dep.task_id, state
            ));
        }
    }

    output.trim_end().to_string()
}
