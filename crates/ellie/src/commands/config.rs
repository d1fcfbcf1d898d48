//! Config command implementation and API key resolution.
//!
//! The config file is YAML at `<config dir>/ellie/config.yaml` (override with
//! `--config` or `ELLIE_CONFIG`) and holds two optional keys, `api_key` and
//! `base_url`.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use ellie_api_rs::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};
use crate::output::{format_config_json, format_config_table, ConfigShowOutput};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ELLIE_API_KEY";

/// Environment variable naming a file that contains the API key.
pub const API_KEY_FILE_ENV: &str = "ELLIE_API_KEY_FILE";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "ELLIE_BASE_URL";

/// Keys shorter than or equal to this are fully starred in `config show`.
const KEY_MASK_MIN_LENGTH: usize = 12;

/// Leading characters left visible when masking a key.
const KEY_MASK_PREFIX_CHARS: usize = 8;

/// Trailing characters left visible when masking a key.
const KEY_MASK_SUFFIX_CHARS: usize = 4;

/// Message returned when no key source is configured.
pub const API_KEY_NOT_CONFIGURED: &str = "API key not configured. Set ELLIE_API_KEY, ELLIE_API_KEY_FILE, or run 'ellie config set-api-key <key>'";

/// Configuration file structure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API key (optional, the environment takes precedence).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Gets the config file path, honoring an explicit override.
pub fn get_config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }

    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("ellie").join("config.yaml"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Creates the directory holding the config file if it does not exist yet.
pub fn ensure_config_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }
    Ok(())
}

/// Loads the configuration from disk. A missing or empty file is an empty config.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|e| {
        CommandError::Config(format!(
            "Failed to parse config {}: {}",
            path.display(),
            e
        ))
    })
}

/// Saves the configuration to disk, creating the directory if necessary.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    ensure_config_dir(path)?;

    let content = serde_yaml::to_string(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    tracing::debug!(path = %path.display(), "saved config");
    Ok(())
}

// ============================================================================
// API key and base URL resolution
// ============================================================================

/// Where the API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeySource {
    /// `ELLIE_API_KEY`
    Env,
    /// The file named by `ELLIE_API_KEY_FILE`
    File,
    /// `api_key` in the config file
    Config,
}

impl fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiKeySource::Env => API_KEY_ENV,
            ApiKeySource::File => API_KEY_FILE_ENV,
            ApiKeySource::Config => "config file",
        };
        f.write_str(name)
    }
}

/// The raw inputs of API key resolution, in priority order.
#[derive(Debug, Default, Clone)]
pub struct ApiKeySources {
    pub env_key: Option<String>,
    pub key_file: Option<PathBuf>,
    pub config_key: Option<String>,
}

impl ApiKeySources {
    /// Reads the key sources from the process environment and a loaded config.
    pub fn from_env(config: &Config) -> Self {
        Self {
            env_key: env::var(API_KEY_ENV).ok(),
            key_file: env::var_os(API_KEY_FILE_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            config_key: config.api_key.clone(),
        }
    }
}

/// A resolved API key and its source.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedApiKey {
    pub key: String,
    pub source: ApiKeySource,
}

impl fmt::Debug for ResolvedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedApiKey")
            .field("key", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolves the API key with priority: env > key file > config.
///
/// Returns `Ok(None)` when no source is set. A key file that cannot be read or
/// holds only whitespace is an error rather than a fallthrough.
pub fn resolve_api_key(sources: &ApiKeySources) -> Result<Option<ResolvedApiKey>> {
    if let Some(key) = non_blank(sources.env_key.as_deref()) {
        tracing::debug!(source = %ApiKeySource::Env, "resolved API key");
        return Ok(Some(ResolvedApiKey {
            key: key.to_string(),
            source: ApiKeySource::Env,
        }));
    }

    if let Some(path) = &sources.key_file {
        let content = fs::read_to_string(path).map_err(|e| {
            CommandError::Config(format!(
                "Failed to read API key file {}: {}",
                path.display(),
                e
            ))
        })?;
        let key = content.trim();
        if key.is_empty() {
            return Err(CommandError::Config(format!(
                "API key file {} is empty",
                path.display()
            )));
        }
        tracing::debug!(source = %ApiKeySource::File, path = %path.display(), "resolved API key");
        return Ok(Some(ResolvedApiKey {
            key: key.to_string(),
            source: ApiKeySource::File,
        }));
    }

    if let Some(key) = non_blank(sources.config_key.as_deref()) {
        tracing::debug!(source = %ApiKeySource::Config, "resolved API key");
        return Ok(Some(ResolvedApiKey {
            key: key.to_string(),
            source: ApiKeySource::Config,
        }));
    }

    tracing::debug!("no API key source configured");
    Ok(None)
}

/// Resolves the API key, failing when no source is set.
pub fn require_api_key(sources: &ApiKeySources) -> Result<ResolvedApiKey> {
    resolve_api_key(sources)?
        .ok_or_else(|| CommandError::Config(API_KEY_NOT_CONFIGURED.to_string()))
}

/// Resolves the base URL: env > config > default, without a trailing slash.
pub fn resolve_base_url(env_url: Option<&str>, config: &Config) -> String {
    let url = non_blank(env_url)
        .or_else(|| non_blank(config.base_url.as_deref()))
        .unwrap_or(DEFAULT_BASE_URL);
    url.trim_end_matches('/').to_string()
}

/// Connection settings for an authenticated command.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Settings {
    /// Resolves settings from the environment and the config file at `path`.
    pub fn resolve(path: &Path) -> Result<Self> {
        let config = load_config(path)?;
        let resolved = require_api_key(&ApiKeySources::from_env(&config))?;
        let base_url = resolve_base_url(env::var(BASE_URL_ENV).ok().as_deref(), &config);
        tracing::debug!(%base_url, "resolved base URL");

        Ok(Self {
            api_key: resolved.key,
            base_url,
        })
    }
}

// ============================================================================
// Config subcommands
// ============================================================================

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config(&ctx.config_path)?;
    let resolved = resolve_api_key(&ApiKeySources::from_env(&config))?;
    let base_url = resolve_base_url(env::var(BASE_URL_ENV).ok().as_deref(), &config);

    let masked = resolved.as_ref().map(|r| mask_api_key(&r.key));
    let output = ConfigShowOutput {
        base_url: &base_url,
        api_key: masked.as_deref(),
        api_key_source: resolved.as_ref().map(|r| r.source),
        config_path: ctx.config_path.display().to_string(),
    };

    if ctx.json_output {
        ctx.emit(&format_config_json(&output)?);
    } else {
        ctx.emit(&format_config_table(&output, ctx.use_colors));
    }

    Ok(())
}

/// Executes the config set-api-key command.
pub fn execute_set_api_key(ctx: &CommandContext, key: &str) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CommandError::Usage("API key cannot be empty".to_string()));
    }

    let mut config = load_config(&ctx.config_path)?;
    config.api_key = Some(key.to_string());
    save_config(&ctx.config_path, &config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "path": ctx.config_path.display().to_string(),
        });
        ctx.emit(&serde_json::to_string_pretty(&output)?);
    } else {
        ctx.emit(&format!("API key saved to {}", ctx.config_path.display()));
    }

    Ok(())
}

/// Executes the config set-base-url command.
pub fn execute_set_base_url(ctx: &CommandContext, url: &str) -> Result<()> {
    let url = url.trim();
    if url.is_empty() {
        return Err(CommandError::Usage("base URL cannot be empty".to_string()));
    }

    let mut config = load_config(&ctx.config_path)?;
    config.base_url = Some(url.to_string());
    save_config(&ctx.config_path, &config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "base_url": url,
        });
        ctx.emit(&serde_json::to_string_pretty(&output)?);
    } else {
        ctx.emit(&format!("Base URL set to: {url}"));
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    if ctx.json_output {
        let output = serde_json::json!({
            "path": ctx.config_path.display().to_string(),
            "exists": ctx.config_path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", ctx.config_path.display());
    }

    Ok(())
}

/// Masks an API key for display.
///
/// Keys of up to 12 characters are fully starred; longer keys keep their first
/// 8 and last 4 characters. Counts characters, not bytes.
pub fn mask_api_key(key: &str) -> String {
    let char_count = key.chars().count();
    if char_count <= KEY_MASK_MIN_LENGTH {
        return "*".repeat(char_count);
    }

    let prefix: String = key.chars().take(KEY_MASK_PREFIX_CHARS).collect();
    let suffix: String = key
        .chars()
        .skip(char_count - KEY_MASK_SUFFIX_CHARS)
        .collect();
    format!("{}{}{}", prefix, "*".repeat(char_count - KEY_MASK_MIN_LENGTH), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_get_config_path_override() {
        let path = get_config_path(Some(Path::new("/tmp/custom/ellie.yaml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom/ellie.yaml"));
    }

    #[test]
    fn test_get_config_path_default_location() {
        let path = get_config_path(None).unwrap();
        assert!(path.ends_with(Path::new("ellie").join("config.yaml")));
    }

    #[test]
    fn test_load_missing_config_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(&temp_dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_empty_config_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "config.yaml", "\n");
        assert_eq!(load_config(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_config_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "config.yaml",
            "api_key: ellie_from_config\nbase_url: https://staging.example.com\n",
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("ellie_from_config"));
        assert_eq!(config.base_url.as_deref(), Some("https://staging.example.com"));
    }

    #[test]
    fn test_load_malformed_config_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "config.yaml", "api_key: [unclosed\n");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, CommandError::Config(_)));
    }

    #[test]
    fn test_save_creates_directory_and_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("ellie").join("config.yaml");

        let config = Config {
            api_key: Some("saved-key".to_string()),
            base_url: None,
        };
        save_config(&path, &config).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("api_key: saved-key"));
        assert!(!content.contains("base_url"));
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_ensure_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("config.yaml");

        ensure_config_dir(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn test_resolve_env_key_wins_over_file_and_config() {
        let temp_dir = TempDir::new().unwrap();
        let key_file = write_file(&temp_dir, "key", "file-key\n");

        let sources = ApiKeySources {
            env_key: Some("env-key".to_string()),
            key_file: Some(key_file),
            config_key: Some("config-key".to_string()),
        };

        let resolved = require_api_key(&sources).unwrap();
        assert_eq!(resolved.key, "env-key");
        assert_eq!(resolved.source, ApiKeySource::Env);
    }

    #[test]
    fn test_resolve_key_file_is_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let key_file = write_file(&temp_dir, "key", "  file-key \n\n");

        let sources = ApiKeySources {
            env_key: None,
            key_file: Some(key_file),
            config_key: Some("config-key".to_string()),
        };

        let resolved = require_api_key(&sources).unwrap();
        assert_eq!(resolved.key, "file-key");
        assert_eq!(resolved.source, ApiKeySource::File);
    }

    #[test]
    fn test_resolve_blank_env_key_falls_through() {
        let sources = ApiKeySources {
            env_key: Some("   ".to_string()),
            key_file: None,
            config_key: Some("config-key".to_string()),
        };

        let resolved = require_api_key(&sources).unwrap();
        assert_eq!(resolved.key, "config-key");
        assert_eq!(resolved.source, ApiKeySource::Config);
    }

    #[test]
    fn test_resolve_unreadable_key_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let sources = ApiKeySources {
            env_key: None,
            key_file: Some(temp_dir.path().join("does-not-exist")),
            config_key: Some("config-key".to_string()),
        };

        let err = resolve_api_key(&sources).unwrap_err();
        assert!(matches!(err, CommandError::Config(_)));
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[test]
    fn test_resolve_empty_key_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let key_file = write_file(&temp_dir, "key", " \n");

        let sources = ApiKeySources {
            env_key: None,
            key_file: Some(key_file),
            config_key: None,
        };

        let err = resolve_api_key(&sources).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn test_resolve_no_source() {
        let sources = ApiKeySources::default();
        assert!(resolve_api_key(&sources).unwrap().is_none());

        let err = require_api_key(&sources).unwrap_err();
        assert!(matches!(err, CommandError::Config(_)));
        let message = err.to_string();
        assert!(message.contains("ELLIE_API_KEY,"));
        assert!(message.contains("ELLIE_API_KEY_FILE"));
        assert!(message.contains("ellie config set-api-key"));
    }

    #[test]
    fn test_resolved_key_debug_is_redacted() {
        let resolved = ResolvedApiKey {
            key: "super-secret".to_string(),
            source: ApiKeySource::Env,
        };
        assert!(!format!("{:?}", resolved).contains("super-secret"));

        let settings = Settings {
            api_key: "super-secret".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        assert!(!format!("{:?}", settings).contains("super-secret"));
    }

    #[test]
    fn test_resolve_base_url_priority() {
        let config = Config {
            api_key: None,
            base_url: Some("https://config.example.com/".to_string()),
        };

        assert_eq!(
            resolve_base_url(Some("https://env.example.com/"), &config),
            "https://env.example.com"
        );
        assert_eq!(resolve_base_url(None, &config), "https://config.example.com");
        assert_eq!(resolve_base_url(Some(""), &config), "https://config.example.com");
        assert_eq!(resolve_base_url(None, &Config::default()), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_api_key_source_display() {
        assert_eq!(ApiKeySource::Env.to_string(), "ELLIE_API_KEY");
        assert_eq!(ApiKeySource::File.to_string(), "ELLIE_API_KEY_FILE");
        assert_eq!(ApiKeySource::Config.to_string(), "config file");
        assert_eq!(
            serde_json::to_string(&ApiKeySource::File).unwrap(),
            r#""file""#
        );
    }

    #[test]
    #[serial]
    fn test_sources_from_env() {
        let original_key = env::var_os(API_KEY_ENV);
        let original_file = env::var_os(API_KEY_FILE_ENV);

        env::set_var(API_KEY_ENV, "from-env");
        env::set_var(API_KEY_FILE_ENV, "");
        let config = Config {
            api_key: Some("from-config".to_string()),
            base_url: None,
        };
        let sources = ApiKeySources::from_env(&config);

        match original_key {
            Some(value) => env::set_var(API_KEY_ENV, value),
            None => env::remove_var(API_KEY_ENV),
        }
        match original_file {
            Some(value) => env::set_var(API_KEY_FILE_ENV, value),
            None => env::remove_var(API_KEY_FILE_ENV),
        }

        assert_eq!(sources.env_key.as_deref(), Some("from-env"));
        assert!(sources.key_file.is_none());
        assert_eq!(sources.config_key.as_deref(), Some("from-config"));
    }

    #[test]
    #[serial]
    fn test_settings_resolve_from_config_file() {
        let original_key = env::var_os(API_KEY_ENV);
        let original_file = env::var_os(API_KEY_FILE_ENV);
        let original_url = env::var_os(BASE_URL_ENV);
        env::remove_var(API_KEY_ENV);
        env::remove_var(API_KEY_FILE_ENV);
        env::remove_var(BASE_URL_ENV);

        let temp_dir = TempDir::new().unwrap();
        let path = write_file(
            &temp_dir,
            "config.yaml",
            "api_key: config-key\nbase_url: http://localhost:9999/\n",
        );
        let result = Settings::resolve(&path);

        for (name, value) in [
            (API_KEY_ENV, original_key),
            (API_KEY_FILE_ENV, original_file),
            (BASE_URL_ENV, original_url),
        ] {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }

        let settings = result.unwrap();
        assert_eq!(settings.api_key, "config-key");
        assert_eq!(settings.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_mask_api_key_ascii() {
        assert_eq!(mask_api_key("ellie_live_0123456789"), "ellie_li*********6789");
        assert_eq!(mask_api_key("abcdefghijklm"), "abcdefgh*jklm");
        assert_eq!(mask_api_key("abcdefghijkl"), "************");
        assert_eq!(mask_api_key("short"), "*****");
        assert_eq!(mask_api_key(""), "");
    }

    #[test]
    fn test_mask_api_key_utf8() {
        // 14 characters, multi-byte: counted by char, never split mid-codepoint
        let key = "ключ-секрет-42";
        assert_eq!(key.chars().count(), 14);
        assert_eq!(mask_api_key(key), "ключ-сек**т-42");
    }
}
