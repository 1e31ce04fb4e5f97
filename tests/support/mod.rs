//! Shared helpers for integration tests.

#![allow(dead_code)]

use stackradar::fs::RealFileSystem;
use stackradar::{Detector, LanguageRegistry};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a temporary repository containing `files` (relative path, content).
pub fn repo(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (relative, content) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }
    dir
}

/// Indicator-only detector on the real filesystem.
pub fn detector() -> Detector {
    Detector::with_parts(
        Box::new(RealFileSystem),
        LanguageRegistry::with_defaults(),
        None,
        false,
    )
}

pub fn csproj(target: &str) -> String {
    format!(
        "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n    {}\n  </PropertyGroup>\n</Project>\n",
        target
    )
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
