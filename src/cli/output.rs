//! Output formatting for detection results and the `check` report
//!
//! # Example
//!
//! ```
//! use stackradar::cli::output::{LanguageInfo, OutputFormat, OutputFormatter, TechStack};
//!
//! let stack = TechStack {
//!     language: LanguageInfo {
//!         name: "go".to_string(),
//!         version: "1.22".to_string(),
//!         build_tool: "go".to_string(),
//!         ci_image_tag: "golang:1.22-alpine".to_string(),
//!     },
//! };
//! let env = OutputFormatter::new(OutputFormat::Env).format(&stack).unwrap();
//! assert!(env.ends_with("CI_IMAGE_TAG=golang:1.22-alpine\n"));
//! ```

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

use crate::config::StackradarConfig;
use crate::detection::DetectionResult;

const ENV_LANGUAGE_NAME: &str = "LANGUAGE_NAME";
const ENV_LANGUAGE_VERSION: &str = "LANGUAGE_VERSION";
const ENV_BUILD_TOOL: &str = "BUILD_TOOL";
const ENV_CI_IMAGE_TAG: &str = "CI_IMAGE_TAG";

/// Serialization format for a [`TechStack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    /// Pretty-printed JSON
    Json,
    /// `KEY=VALUE` lines, suitable for `$GITHUB_ENV` or `source`
    Env,
}

/// Format of the `check` report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Human,
    Json,
    Yaml,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
    pub version: String,
    pub build_tool: String,
    pub ci_image_tag: String,
}

/// Serialized shape of a detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub language: LanguageInfo,
}

impl From<DetectionResult> for TechStack {
    fn from(result: DetectionResult) -> Self {
        Self {
            language: LanguageInfo {
                name: result.language,
                version: result.version,
                build_tool: result.build_tool,
                ci_image_tag: result.image_tag,
            },
        }
    }
}

impl TechStack {
    /// Renders the four environment lines, each terminated by a newline.
    pub fn to_env(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}={}", ENV_LANGUAGE_NAME, self.language.name);
        let _ = writeln!(out, "{}={}", ENV_LANGUAGE_VERSION, self.language.version);
        let _ = writeln!(out, "{}={}", ENV_BUILD_TOOL, self.language.build_tool);
        let _ = writeln!(out, "{}={}", ENV_CI_IMAGE_TAG, self.language.ci_image_tag);
        out
    }

    /// Parses the output of [`TechStack::to_env`]. Blank lines, comments and
    /// unknown keys are ignored; each of the four keys must be present.
    pub fn from_env_str(input: &str) -> Result<Self> {
        let mut values: HashMap<&str, &str> = HashMap::new();
        for line in input.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| anyhow!("Malformed env line: {:?}", line))?;
            values.insert(key.trim(), value);
        }

        let take = |key: &str| -> Result<String> {
            values
                .get(key)
                .map(|v| v.to_string())
                .ok_or_else(|| anyhow!("Missing {} in env output", key))
        };

        Ok(Self {
            language: LanguageInfo {
                name: take(ENV_LANGUAGE_NAME)?,
                version: take(ENV_LANGUAGE_VERSION)?,
                build_tool: take(ENV_BUILD_TOOL)?,
                ci_image_tag: take(ENV_CI_IMAGE_TAG)?,
            },
        })
    }

    /// Parses any of the three output formats.
    pub fn parse(input: &str, format: OutputFormat) -> Result<Self> {
        match format {
            OutputFormat::Yaml => {
                serde_yaml::from_str(input).context("Failed to parse tech stack from YAML")
            }
            OutputFormat::Json => {
                serde_json::from_str(input).context("Failed to parse tech stack from JSON")
            }
            OutputFormat::Env => Self::from_env_str(input),
        }
    }
}

/// Availability of the external classifier, as shown by `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierStatus {
    pub program: String,
    pub enabled: bool,
    pub available: bool,
    pub message: String,
}

impl ClassifierStatus {
    pub fn new(config: &StackradarConfig, available: bool) -> Self {
        let message = if !config.classifier_enabled {
            "Disabled by STACKRADAR_CLASSIFIER_ENABLED; indicator files only".to_string()
        } else if available {
            format!("{} found", config.classifier_program)
        } else {
            format!(
                "{} not found on PATH; falling back to indicator files",
                config.classifier_program
            )
        };

        Self {
            program: config.classifier_program.clone(),
            enabled: config.classifier_enabled,
            available,
            message,
        }
    }
}

#[derive(Serialize)]
struct CheckReport<'a> {
    classifier: &'a ClassifierStatus,
    configuration: BTreeMap<String, String>,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, stack: &TechStack) -> Result<String> {
        match self.format {
            OutputFormat::Yaml => {
                serde_yaml::to_string(stack).context("Failed to serialize tech stack to YAML")
            }
            OutputFormat::Json => serde_json::to_string_pretty(stack)
                .map(|json| json + "\n")
                .context("Failed to serialize tech stack to JSON"),
            OutputFormat::Env => Ok(stack.to_env()),
        }
    }
}

/// Renders the `check` report.
pub fn format_check(
    format: ReportFormat,
    status: &ClassifierStatus,
    config: &StackradarConfig,
) -> Result<String> {
    let report = CheckReport {
        classifier: status,
        configuration: config.to_display_map().into_iter().collect(),
    };

    match format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&report).context("Failed to serialize check report to JSON")
        }
        ReportFormat::Yaml => {
            serde_yaml::to_string(&report).context("Failed to serialize check report to YAML")
        }
        ReportFormat::Human => {
            let mut output = String::new();
            output.push_str("Checking dependencies...\n\n");

            let symbol = if status.available {
                "\u{2713}"
            } else {
                "\u{26A0}"
            };
            let state = match (status.enabled, status.available) {
                (false, _) => "Disabled",
                (true, true) => "Available",
                (true, false) => "Not available",
            };
            let _ = writeln!(output, "{} {}: {}", symbol, status.program, state);
            let _ = writeln!(output, "  {}", status.message);
            output.push('\n');
            output.push_str(&config.to_string());
            Ok(output)
        }
    }
}
