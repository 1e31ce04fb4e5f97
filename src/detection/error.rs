use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Terminal failures of a single detection.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// Target path does not exist
    #[error("Repository path not found: {0}")]
    PathNotFound(PathBuf),

    /// Target path exists but is a file
    #[error("Repository path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Target path could not be made absolute
    #[error("Failed to resolve path {path}: {reason}")]
    PathResolution { path: PathBuf, reason: String },

    /// Neither the external classifier nor any indicator file identified a language
    #[error("No supported language detected in {0}")]
    NotDetected(PathBuf),
}

impl DetectionError {
    /// True for the failures that happen before any classification runs.
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            DetectionError::PathNotFound(_)
                | DetectionError::NotADirectory(_)
                | DetectionError::PathResolution { .. }
        )
    }

    /// Returns a user-friendly error message with troubleshooting hints
    pub fn help_message(&self) -> String {
        match self {
            DetectionError::PathNotFound(path) => {
                format!(
                    "Error: Repository path not found\nPath: {}\n\n\
                    Help: The specified path does not exist. Please check:\n\
                    - Is the path correct?\n\
                    - Does the path exist on your system?\n\
                    - Do you have permission to access it?",
                    path.display()
                )
            }
            DetectionError::NotADirectory(path) => {
                format!(
                    "Error: Repository path is not a directory\nPath: {}\n\n\
                    Help: The specified path is a file, not a directory.\n\
                    Please provide the path to the repository root directory.",
                    path.display()
                )
            }
            DetectionError::PathResolution { path, reason } => {
                format!(
                    "Error: Could not resolve repository path\nPath: {}\n\n\
                    Help: The working directory may have been removed.\n\
                    Try passing an absolute path with --path.\n\n\
                    Details: {}",
                    path.display(),
                    reason
                )
            }
            DetectionError::NotDetected(path) => {
                format!(
                    "Error: No supported language detected\nPath: {}\n\n\
                    Help: None of the known project files were found. Check that:\n\
                    - The path points at the repository root\n\
                    - A manifest such as package.json, go.mod, pom.xml or Cargo.toml exists\n\
                    - github-linguist is installed for broader language coverage\n\n\
                    Run 'stackradar check' to see the active configuration.",
                    path.display()
                )
            }
        }
    }
}

/// Failures of the external classifier. These never abort a detection.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("{program} did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("Invalid classifier output: {0}")]
    InvalidOutput(String),

    #[error("Classifier reported no languages")]
    Empty,
}
