//! Task output formatting.

use ellie_api_rs::models::Task;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{dim, estimate_minutes, format_priority};

/// Formats a single task as text.
///
/// ```text
/// [ ] Write report
///     ID: task-1
///     Date: 2026-01-25
///     Estimated: 30 min
///     Priority: High
/// ```
pub fn format_task(task: &Task, use_colors: bool) -> String {
    let status = if task.complete { "[x]" } else { "[ ]" };
    let status = if use_colors && task.complete {
        status.green().to_string()
    } else {
        status.to_string()
    };
    let description = if use_colors && task.complete {
        task.description.dimmed().to_string()
    } else {
        task.description.clone()
    };

    let mut lines = vec![
        format!("{status} {description}"),
        format!("    ID: {}", dim(&task.id, use_colors)),
    ];

    if let Some(date) = task.date_str().filter(|d| !d.is_empty()) {
        lines.push(format!("    Date: {date}"));
    }
    if let Some(start) = task.start_str().filter(|s| !s.is_empty()) {
        lines.push(format!("    Start: {start}"));
    }
    if let Some(minutes) = estimate_minutes(task.estimated_time) {
        lines.push(format!("    Estimated: {minutes} min"));
    }
    if let Some(priority) = task.priority {
        lines.push(format!("    Priority: {}", format_priority(priority, use_colors)));
    }
    if let Some(label) = &task.label {
        lines.push(format!("    Label: {label}"));
    }
    if let Some(list_id) = &task.list_id {
        lines.push(format!("    List: {list_id}"));
    }

    lines.join("\n")
}

/// Formats tasks as text, separated by a blank line.
pub fn format_tasks(tasks: &[Task], use_colors: bool) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    tasks
        .iter()
        .map(|task| format_task(task, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// JSON output structure for a deleted task.
#[derive(Serialize)]
pub struct DeletedTaskOutput<'a> {
    pub id: &'a str,
    pub status: &'static str,
}

/// Formats a deleted task as JSON.
pub fn format_deleted_task_json(task_id: &str) -> Result<String, serde_json::Error> {
    let output = DeletedTaskOutput {
        id: task_id,
        status: "deleted",
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a deleted task as text.
pub fn format_deleted_task() -> String {
    "Task deleted successfully".to_string()
}
