//! Label and list models.

use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// A label for categorizing tasks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Label {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Hex color, e.g. `#FF5733`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

/// A task list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct List {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Emoji or icon shown next to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Label automatically applied to tasks created in this list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_label_id: Option<String>,
}

impl List {
    /// Returns the icon if one is set and non-empty.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|icon| !icon.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_deserialize() {
        let label: Label =
            serde_json::from_str(r##"{"id": "l1", "name": "Work", "color": "#FF5733"}"##).unwrap();
        assert_eq!(label.id, "l1");
        assert_eq!(label.name, "Work");
        assert_eq!(label.color, "#FF5733");
    }

    #[test]
    fn test_list_optional_fields() {
        let list: List = serde_json::from_str(r#"{"id": "a", "title": "Inbox"}"#).unwrap();
        assert!(list.icon.is_none());
        assert!(list.auto_label_id.is_none());

        let json = serde_json::to_value(&list).unwrap();
        assert!(json.get("icon").is_none());
        assert!(json.get("auto_label_id").is_none());
    }

    #[test]
    fn test_list_empty_icon_is_treated_as_unset() {
        let list: List =
            serde_json::from_str(r#"{"id": "a", "title": "Inbox", "icon": ""}"#).unwrap();
        assert_eq!(list.icon(), None);

        let list: List =
            serde_json::from_str(r#"{"id": "b", "title": "Home", "icon": "🏠", "auto_label_id": "lbl"}"#)
                .unwrap();
        assert_eq!(list.icon(), Some("🏠"));
        assert_eq!(list.auto_label_id.as_deref(), Some("lbl"));
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let label: Label =
            serde_json::from_str(r#"{"id": "l1", "name": null, "color": null}"#).unwrap();
        assert_eq!(label.name, "");
        assert_eq!(label.color, "");

        let list: List =
            serde_json::from_str(r#"{"id": null, "title": null, "icon": null}"#).unwrap();
        assert_eq!(list, List::default());
    }
}
