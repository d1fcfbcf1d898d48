//! Output formatting utilities for the ellie CLI.
//!
//! Every formatter returns a `String` without a trailing newline. JSON output
//! is the pretty-printed DTO; text output is organized by entity type:
//!
//! - [`tasks`] - Task output formatting (single task, task lists, delete)
//! - [`labels`] - Label output formatting
//! - [`lists`] - List output formatting
//! - [`users`] - User and API usage output formatting
//! - [`config`] - `config show` output formatting
//! - [`helpers`] - Common formatting utilities (JSON, priority names)

mod config;
pub mod helpers;
mod labels;
mod lists;
mod tasks;
mod users;

pub use helpers::format_json;

// Tasks
pub use tasks::{format_deleted_task, format_deleted_task_json, format_task, format_tasks};

// Labels
pub use labels::{format_label, format_labels};

// Lists
pub use lists::format_lists;

// Users
pub use users::{format_usage, format_user};

// Config
pub use config::{format_config_json, format_config_table, ConfigShowOutput};
