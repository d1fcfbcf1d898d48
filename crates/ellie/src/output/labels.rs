//! Label output formatting.

use ellie_api_rs::models::Label;
use owo_colors::OwoColorize;

use super::helpers::dim;

/// Formats a label as text: `• name (color)` followed by its ID.
pub fn format_label(label: &Label, use_colors: bool) -> String {
    let name = if use_colors {
        label.name.bold().to_string()
    } else {
        label.name.clone()
    };
    format!(
        "• {} ({})\n  ID: {}",
        name,
        label.color,
        dim(&label.id, use_colors)
    )
}

/// Formats labels as text.
pub fn format_labels(labels: &[Label], use_colors: bool) -> String {
    if labels.is_empty() {
        return "No labels found".to_string();
    }

    labels
        .iter()
        .map(|label| format_label(label, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}
