//! List output formatting.

use ellie_api_rs::models::List;

use super::helpers::dim;

fn format_list(list: &List, use_colors: bool) -> String {
    let heading = match list.icon() {
        Some(icon) => format!("{icon} {}", list.title),
        None => format!("• {}", list.title),
    };
    format!("{heading}\n  ID: {}", dim(&list.id, use_colors))
}

/// Formats lists as text: `icon title` (or `• title`) followed by the ID.
pub fn format_lists(lists: &[List], use_colors: bool) -> String {
    if lists.is_empty() {
        return "No lists found".to_string();
    }

    lists
        .iter()
        .map(|list| format_list(list, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}
