//! `config show` output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::config::ApiKeySource;

/// The effective configuration, with the API key already masked.
#[derive(Debug, Serialize)]
pub struct ConfigShowOutput<'a> {
    pub base_url: &'a str,
    pub api_key: Option<&'a str>,
    pub api_key_source: Option<ApiKeySource>,
    pub config_path: String,
}

/// Formats the configuration as JSON.
pub fn format_config_json(output: &ConfigShowOutput) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(output)
}

/// Formats the configuration as text.
pub fn format_config_table(output: &ConfigShowOutput, use_colors: bool) -> String {
    let header = "Configuration:";
    let header = if use_colors {
        header.green().bold().to_string()
    } else {
        header.to_string()
    };

    let api_key = match (output.api_key, output.api_key_source) {
        (Some(masked), Some(source)) => format!("{masked} (from {source})"),
        (Some(masked), None) => masked.to_string(),
        (None, _) => "(not set)".to_string(),
    };

    [
        header,
        format!("  Base URL: {}", output.base_url),
        format!("  API Key:  {api_key}"),
        String::new(),
        format!("Config file: {}", output.config_path),
        String::new(),
        "API key priority:".to_string(),
        "  1. ELLIE_API_KEY environment variable".to_string(),
        "  2. ELLIE_API_KEY_FILE environment variable (path to file)".to_string(),
        "  3. Config file".to_string(),
    ]
    .join("\n")
}
