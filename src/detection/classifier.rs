//! Language classification.
//!
//! An optional external classifier (GitHub Linguist by default) is asked for
//! a per-language byte breakdown first. Its failures are absorbed and the
//! registry's indicator files decide instead.

use super::error::ClassifierError;
use crate::fs::{matches_any, FileSystem};
use crate::stack::{LanguageId, LanguageRegistry};
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const DEFAULT_CLASSIFIER: &str = "github-linguist";

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Narrow seam over a language-breakdown tool.
pub trait ExternalClassifier: Send + Sync {
    fn name(&self) -> &str;

    /// Cheap availability check. Called once per detector.
    fn probe(&self) -> bool;

    /// Bytes of source per language name, as reported by the tool.
    fn breakdown(&self, path: &Path) -> Result<HashMap<String, u64>, ClassifierError>;
}

/// Runs `github-linguist` (or a compatible program) as a child process.
#[derive(Debug, Clone)]
pub struct Linguist {
    program: String,
    timeout: Duration,
}

impl Linguist {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn spawn_error(&self, source: std::io::Error) -> ClassifierError {
        ClassifierError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl Default for Linguist {
    fn default() -> Self {
        Self::new(DEFAULT_CLASSIFIER, Duration::from_secs(30))
    }
}

impl ExternalClassifier for Linguist {
    fn name(&self) -> &str {
        &self.program
    }

    fn probe(&self) -> bool {
        let available = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);

        debug!(program = %self.program, available, "Probed external classifier");
        available
    }

    fn breakdown(&self, path: &Path) -> Result<HashMap<String, u64>, ClassifierError> {
        let mut child = Command::new(&self.program)
            .arg("--json")
            .current_dir(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // Drain both pipes off-thread so a chatty child cannot block on a full pipe.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait().map_err(|e| self.spawn_error(e))? {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    warn!(program = %self.program, timeout = ?self.timeout, "External classifier timed out");
                    return Err(ClassifierError::Timeout {
                        program: self.program.clone(),
                        timeout: self.timeout,
                    });
                }
                None => thread::sleep(POLL_INTERVAL),
            }
        };

        let stdout = stdout.and_then(|h| h.join().ok()).unwrap_or_default();
        let stderr = stderr.and_then(|h| h.join().ok()).unwrap_or_default();

        if !status.success() {
            return Err(ClassifierError::Failed {
                program: self.program.clone(),
                status: status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        parse_breakdown(&stdout)
    }
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        let _ = reader.read_to_string(&mut buf);
        buf
    })
}

/// Parses a `--json` breakdown. Values are either byte counts or objects
/// carrying a `size` field.
pub fn parse_breakdown(output: &str) -> Result<HashMap<String, u64>, ClassifierError> {
    let value: Value = serde_json::from_str(output.trim())
        .map_err(|e| ClassifierError::InvalidOutput(e.to_string()))?;

    let Value::Object(entries) = value else {
        return Err(ClassifierError::InvalidOutput(
            "expected a JSON object".to_string(),
        ));
    };

    let breakdown: HashMap<String, u64> = entries
        .into_iter()
        .filter_map(|(language, stats)| {
            let bytes = stats
                .as_u64()
                .or_else(|| stats.get("size").and_then(Value::as_u64))?;
            Some((language, bytes))
        })
        .collect();

    if breakdown.is_empty() {
        return Err(ClassifierError::Empty);
    }
    Ok(breakdown)
}

/// Language with the most bytes; ties go to the alphabetically first name.
pub fn dominant_language(breakdown: &HashMap<String, u64>) -> Option<LanguageId> {
    breakdown
        .iter()
        .max_by(|(a_name, a_bytes), (b_name, b_bytes)| {
            a_bytes.cmp(b_bytes).then_with(|| b_name.cmp(a_name))
        })
        .map(|(name, _)| LanguageId::from_name_or_custom(&name.to_lowercase()))
}

/// First registry profile, in declaration order, with an indicator present under `root`.
pub fn match_indicators(
    fs: &dyn FileSystem,
    registry: &LanguageRegistry,
    root: &Path,
) -> Option<LanguageId> {
    registry
        .profiles()
        .find(|profile| matches_any(fs, root, profile.indicators))
        .map(|profile| {
            debug!(language = %profile.id, "Matched indicator files");
            profile.id.clone()
        })
}

/// Test double returning a fixed breakdown.
#[derive(Debug, Clone, Default)]
pub struct StaticClassifier {
    breakdown: Option<HashMap<String, u64>>,
}

impl StaticClassifier {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self {
            breakdown: Some(entries.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    /// A classifier whose every breakdown fails.
    pub fn failing() -> Self {
        Self { breakdown: None }
    }
}

impl ExternalClassifier for StaticClassifier {
    fn name(&self) -> &str {
        "static"
    }

    fn probe(&self) -> bool {
        true
    }

    fn breakdown(&self, _path: &Path) -> Result<HashMap<String, u64>, ClassifierError> {
        match &self.breakdown {
            Some(map) if !map.is_empty() => Ok(map.clone()),
            Some(_) => Err(ClassifierError::Empty),
            None => Err(ClassifierError::InvalidOutput("static failure".to_string())),
        }
    }
}
