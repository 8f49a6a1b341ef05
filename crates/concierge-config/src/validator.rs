//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{Config, KNOWN_EXTENSIONS};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Log levels accepted as a bare `logging.level` value.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Reddit rejects listing limits above this.
const REDDIT_MAX_LIMIT: usize = 100;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_logging(config, &mut result);
        Self::validate_reddit(config, &mut result);
        Self::validate_extensions(config, &mut result);

        Ok(result)
    }

    /// Validate and turn the first error into a [`ConfigError`].
    pub fn ensure_valid(config: &Config) -> Result<ValidationResult, ConfigError> {
        let result = Self::validate(config)?;
        if let Some(first) = result.errors.first() {
            return Err(ConfigError::InvalidValue {
                field: first.path.clone(),
                message: first.message.clone(),
            });
        }
        Ok(result)
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        } else if !level.contains('=') && !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!("Unknown log level '{}', valid values: {:?}", level, LOG_LEVELS),
            ));
        }

        if config.logging.file && config.logging.max_files == 0 {
            result.add_warning(ValidationWarning::new(
                "logging.max_files",
                "max_files is 0, old log files will never be pruned",
            ));
        }
    }

    fn validate_reddit(config: &Config, result: &mut ValidationResult) {
        let reddit = &config.reddit;

        if !reddit.base_url.starts_with("http://") && !reddit.base_url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "reddit.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if reddit.user_agent.trim().is_empty() {
            result.add_error(ValidationError::new(
                "reddit.user_agent",
                "user_agent cannot be empty, Reddit blocks anonymous clients",
            ));
        }

        if reddit.search_limit == 0 {
            result.add_error(ValidationError::new(
                "reddit.search_limit",
                "search_limit must be greater than 0",
            ));
        } else if reddit.search_limit > REDDIT_MAX_LIMIT {
            result.add_warning(ValidationWarning::new(
                "reddit.search_limit",
                format!("search_limit above {} is capped by Reddit", REDDIT_MAX_LIMIT),
            ));
        }

        if reddit.comment_limit == 0 {
            result.add_error(ValidationError::new(
                "reddit.comment_limit",
                "comment_limit must be greater than 0",
            ));
        }

        if reddit.request_timeout_secs == Some(0) {
            result.add_error(ValidationError::new(
                "reddit.request_timeout_secs",
                "request_timeout_secs must be greater than 0 when set",
            ));
        }
    }

    fn validate_extensions(config: &Config, result: &mut ValidationResult) {
        for ext in &config.extensions.enabled {
            if config.extensions.disabled.contains(ext) {
                result.add_error(ValidationError::new(
                    "extensions",
                    format!("Extension '{}' is both enabled and disabled", ext),
                ));
            }
        }

        for ext in config
            .extensions
            .enabled
            .iter()
            .chain(config.extensions.disabled.iter())
        {
            if !KNOWN_EXTENSIONS.contains(&ext.as_str()) {
                result.add_warning(ValidationWarning::new(
                    "extensions",
                    format!("Unknown extension '{}'", ext),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
