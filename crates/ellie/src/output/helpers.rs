//! Common helper functions for output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

/// Pretty-prints any value as JSON. An empty slice prints `[]`.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Returns the display name of a priority (1 Low, 2 Medium, 3 High, 4 Urgent).
///
/// Values outside 1-4 are shown as the number.
pub fn priority_name(priority: i32) -> String {
    match priority {
        1 => "Low".to_string(),
        2 => "Medium".to_string(),
        3 => "High".to_string(),
        4 => "Urgent".to_string(),
        other => other.to_string(),
    }
}

/// Formats priority for display, colored by urgency.
pub fn format_priority(priority: i32, use_colors: bool) -> String {
    let name = priority_name(priority);
    if !use_colors {
        return name;
    }
    match priority {
        4 => name.red().to_string(),
        3 => name.yellow().to_string(),
        2 => name.blue().to_string(),
        _ => name,
    }
}

/// Dims secondary text such as IDs when colors are enabled.
pub fn dim(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Converts an estimate in seconds to whole minutes, if at least one minute.
pub fn estimate_minutes(seconds: Option<i64>) -> Option<i64> {
    seconds.map(|s| s / 60).filter(|minutes| *minutes > 0)
}
