//! Task model for the Ellie API.

use serde::{Deserialize, Serialize};

use super::common::null_as_default;
use super::LenientString;

/// A task in the Ellie planner.
///
/// Timestamps are [`LenientString`]s because the API sends them as a string,
/// as `null`, or omits them entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Task {
    /// The unique identifier for the task.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// The text of the task.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Scheduled day, usually `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "LenientString::is_absent")]
    pub date: LenientString,

    /// Scheduled start time.
    #[serde(default, skip_serializing_if = "LenientString::is_absent")]
    pub start: LenientString,

    #[serde(default, skip_serializing_if = "LenientString::is_absent")]
    pub due_date: LenientString,

    /// Estimated time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<i64>,

    /// Actual time spent in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub complete: bool,

    #[serde(default, skip_serializing_if = "LenientString::is_absent")]
    pub completed_at: LenientString,

    /// The list the task belongs to.
    #[serde(rename = "listId", default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,

    /// The label ID attached to the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Priority from 1 (low) to 4 (urgent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub recurring: bool,

    #[serde(default, skip_serializing_if = "LenientString::is_absent")]
    pub created_at: LenientString,
}

impl Task {
    /// Returns the scheduled date if it arrived as a string.
    pub fn date_str(&self) -> Option<&str> {
        self.date.as_str()
    }

    /// Returns the start time if it arrived as a string.
    pub fn start_str(&self) -> Option<&str> {
        self.start.as_str()
    }
}
