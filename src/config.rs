//! Configuration management for stackradar
//!
//! Settings are loaded from environment variables with defaults. Detection
//! itself needs no configuration; these knobs only control the optional
//! external classifier and logging.
//!
//! # Environment Variables
//!
//! - `STACKRADAR_CLASSIFIER`: external classifier program - default: "github-linguist"
//! - `STACKRADAR_CLASSIFIER_ENABLED`: probe and use the classifier (true|false) - default: "true"
//! - `STACKRADAR_CLASSIFIER_TIMEOUT`: classifier timeout in seconds - default: "30"
//! - `STACKRADAR_LOG_LEVEL`: logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use stackradar::StackradarConfig;
//!
//! let config = StackradarConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use crate::detection::classifier::{Linguist, DEFAULT_CLASSIFIER};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_CLASSIFIER_ENABLED: bool = true;
const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 30;
const MAX_CLASSIFIER_TIMEOUT_SECS: u64 = 600;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackradarConfig {
    /// External classifier executable, looked up on `PATH`
    pub classifier_program: String,

    /// When false the classifier is never probed or invoked
    pub classifier_enabled: bool,

    pub classifier_timeout_secs: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for StackradarConfig {
    /// Loads from `STACKRADAR_*` environment variables, falling back to defaults
    /// for anything missing or unparseable.
    fn default() -> Self {
        let classifier_program = env::var("STACKRADAR_CLASSIFIER")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_CLASSIFIER.to_string());

        let classifier_enabled = env::var("STACKRADAR_CLASSIFIER_ENABLED")
            .ok()
            .and_then(|v| v.trim().to_lowercase().parse::<bool>().ok())
            .unwrap_or(DEFAULT_CLASSIFIER_ENABLED);

        let classifier_timeout_secs = env::var("STACKRADAR_CLASSIFIER_TIMEOUT")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_CLASSIFIER_TIMEOUT_SECS);

        let log_level = env::var("STACKRADAR_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            classifier_program,
            classifier_enabled,
            classifier_timeout_secs,
            log_level,
        }
    }
}

impl StackradarConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an empty classifier program, a timeout outside
    /// 1..=600 seconds, or an unknown log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classifier_program.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Classifier program cannot be empty".to_string(),
            ));
        }

        if self.classifier_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Classifier timeout must be at least 1 second".to_string(),
            ));
        }
        if self.classifier_timeout_secs > MAX_CLASSIFIER_TIMEOUT_SECS {
            return Err(ConfigError::ValidationFailed(
                "Classifier timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn classifier_timeout(&self) -> Duration {
        Duration::from_secs(self.classifier_timeout_secs)
    }

    /// The configured classifier, or `None` when disabled.
    pub fn classifier(&self) -> Option<Linguist> {
        if self.classifier_enabled {
            Some(Linguist::new(
                self.classifier_program.clone(),
                self.classifier_timeout(),
            ))
        } else {
            None
        }
    }

    /// Converts configuration to a display map for output formatting
    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert(
            "classifier_program".to_string(),
            self.classifier_program.clone(),
        );
        map.insert(
            "classifier_enabled".to_string(),
            self.classifier_enabled.to_string(),
        );
        map.insert(
            "classifier_timeout_secs".to_string(),
            self.classifier_timeout_secs.to_string(),
        );
        map.insert("log_level".to_string(), self.log_level.clone());

        map
    }
}

impl fmt::Display for StackradarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stackradar Configuration:")?;
        writeln!(f, "  Classifier: {}", self.classifier_program)?;
        writeln!(f, "  Classifier Enabled: {}", self.classifier_enabled)?;
        writeln!(f, "  Classifier Timeout: {}s", self.classifier_timeout_secs)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
