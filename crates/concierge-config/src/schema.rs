//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Extension IDs shipped with Concierge.
pub const KNOWN_EXTENSIONS: [&str; 3] = ["tools-schedule", "tools-reddit", "tools-weather"];

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub reddit: RedditConfig,

    #[serde(default)]
    pub extensions: ExtensionsConfig,
}

impl Config {
    /// The configuration section handed to an extension at initialization.
    pub fn extension_settings(&self, extension_id: &str) -> Result<serde_json::Value, ConfigError> {
        let section = match extension_id {
            "tools-reddit" => serde_json::to_value(&self.reddit),
            _ => Ok(serde_json::Value::Null),
        };
        section.map_err(|e| ConfigError::InvalidFormat(format!("{}: {}", extension_id, e)))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rolling log files.
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,

    /// Whether to write log files at all.
    #[serde(default = "default_true")]
    pub file: bool,

    /// Number of daily log files to keep.
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: default_log_dir(),
            file: default_true(),
            max_files: default_max_files(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("~/.concierge/logs")
}

fn default_true() -> bool {
    true
}

fn default_max_files() -> usize {
    7
}

/// How the reply list of a thread is trimmed before summarization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTrimMode {
    /// Drop exactly the last entry.
    #[default]
    DropLast,
    /// Keep every entry.
    KeepAll,
}

/// Reddit recommendation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Posts taken from the search response.
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Replies requested per thread.
    #[serde(default = "default_comment_limit")]
    pub comment_limit: usize,

    #[serde(default)]
    pub reply_trim: ReplyTrimMode,

    /// Per-request timeout. Unset means requests never time out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            search_limit: default_search_limit(),
            comment_limit: default_comment_limit(),
            reply_trim: ReplyTrimMode::default(),
            request_timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "https://www.reddit.com".to_string()
}

fn default_user_agent() -> String {
    "concierge/0.1 (restaurant recommendations)".to_string()
}

fn default_search_limit() -> usize {
    10
}

fn default_comment_limit() -> usize {
    30
}

/// Extensions configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionsConfig {
    /// Extensions to load. Empty means all.
    #[serde(default)]
    pub enabled: Vec<String>,

    #[serde(default)]
    pub disabled: Vec<String>,
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
