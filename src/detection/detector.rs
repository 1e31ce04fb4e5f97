//! Detection orchestration: path checks, classification, resolution and tag rendering.

use super::classifier::{dominant_language, match_indicators, ExternalClassifier};
use super::error::DetectionError;
use crate::config::StackradarConfig;
use crate::fs::{FileSystem, RealFileSystem};
use crate::stack::{resolver_for, LanguageId, LanguageRegistry, ProjectDir};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Verdict for one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub language: String,
    pub version: String,
    /// Empty for languages without a resolver
    pub build_tool: String,
    pub image_tag: String,
}

/// Turns a directory into a [`DetectionResult`].
///
/// The external classifier is probed once, when the detector is built; the
/// outcome is kept for the detector's lifetime.
///
/// # Example
///
/// ```no_run
/// use stackradar::{Detector, StackradarConfig};
/// use std::path::Path;
///
/// let detector = Detector::new(&StackradarConfig::default());
/// let result = detector.detect(Path::new(".")).unwrap();
/// println!("{} -> {}", result.language, result.image_tag);
/// ```
pub struct Detector {
    fs: Box<dyn FileSystem>,
    registry: LanguageRegistry,
    classifier: Option<Box<dyn ExternalClassifier>>,
    classifier_available: bool,
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("classifier", &self.classifier.as_ref().map(|c| c.name()))
            .field("classifier_available", &self.classifier_available)
            .finish()
    }
}

impl Detector {
    /// Builds a detector on the real filesystem with the default registry,
    /// probing the configured classifier.
    pub fn new(config: &StackradarConfig) -> Self {
        let classifier = config
            .classifier()
            .map(|c| Box::new(c) as Box<dyn ExternalClassifier>);
        let classifier_available = classifier.as_ref().map(|c| c.probe()).unwrap_or(false);

        info!(
            classifier = %config.classifier_program,
            enabled = config.classifier_enabled,
            available = classifier_available,
            "Detector initialized"
        );

        Self {
            fs: Box::new(RealFileSystem),
            registry: LanguageRegistry::with_defaults(),
            classifier,
            classifier_available,
        }
    }

    /// Builds a detector from explicit parts. `classifier_available` is taken
    /// as given; no probe runs.
    pub fn with_parts(
        fs: Box<dyn FileSystem>,
        registry: LanguageRegistry,
        classifier: Option<Box<dyn ExternalClassifier>>,
        classifier_available: bool,
    ) -> Self {
        Self {
            fs,
            registry,
            classifier,
            classifier_available,
        }
    }

    /// Indicator-only detector over `fs`.
    pub fn with_filesystem(fs: Box<dyn FileSystem>) -> Self {
        Self::with_parts(fs, LanguageRegistry::with_defaults(), None, false)
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn classifier_available(&self) -> bool {
        self.classifier_available
    }

    /// Detects language, build tool, version and image tag for `path`.
    ///
    /// # Errors
    ///
    /// A path error when `path` is not an existing directory, checked before
    /// anything else runs; `NotDetected` when no language could be identified.
    pub fn detect(&self, path: &Path) -> Result<DetectionResult, DetectionError> {
        let root = self.resolve_path(path)?;
        let language = self.classify(&root)?;

        let project = ProjectDir::new(self.fs.as_ref(), &root);
        let (build_tool, detected_version) = match resolver_for(&language) {
            Some(resolver) => {
                let tool = resolver.build_tool(&project);
                let version = resolver.version(&project, &tool);
                (tool.to_string(), version)
            }
            None => {
                debug!(language = %language, "No resolver for language");
                (String::new(), None)
            }
        };

        let version = match detected_version.filter(|v| !v.trim().is_empty()) {
            Some(version) => version,
            None => {
                let fallback = self.registry.default_version(&language);
                debug!(language = %language, version = fallback, "Using default version");
                fallback.to_string()
            }
        };

        let image_tag = self.registry.render_tag(&language, &version);

        info!(
            path = %root.display(),
            language = %language,
            version = %version,
            build_tool = %build_tool,
            image_tag = %image_tag,
            "Detection complete"
        );

        Ok(DetectionResult {
            language: language.to_string(),
            version,
            build_tool,
            image_tag,
        })
    }

    /// Dominant language of `path`: the external classifier when available,
    /// then the registry's indicator files in priority order.
    pub fn classify(&self, path: &Path) -> Result<LanguageId, DetectionError> {
        if let Some(language) = self.classify_external(path) {
            return Ok(language);
        }

        match_indicators(self.fs.as_ref(), &self.registry, path)
            .ok_or_else(|| DetectionError::NotDetected(path.to_path_buf()))
    }

    fn classify_external(&self, path: &Path) -> Option<LanguageId> {
        if !self.classifier_available {
            return None;
        }
        let classifier = self.classifier.as_ref()?;

        match classifier.breakdown(path) {
            Ok(breakdown) => {
                let language = dominant_language(&breakdown);
                debug!(
                    classifier = classifier.name(),
                    languages = breakdown.len(),
                    dominant = ?language,
                    "External classification"
                );
                language
            }
            Err(e) => {
                warn!(
                    classifier = classifier.name(),
                    error = %e,
                    "External classifier failed, falling back to indicator files"
                );
                None
            }
        }
    }

    fn resolve_path(&self, path: &Path) -> Result<PathBuf, DetectionError> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()
                .map_err(|e| DetectionError::PathResolution {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?
                .join(path)
        };

        if !self.fs.exists(&absolute) {
            return Err(DetectionError::PathNotFound(absolute));
        }
        if !self.fs.is_dir(&absolute) {
            return Err(DetectionError::NotADirectory(absolute));
        }

        self.fs
            .canonicalize(&absolute)
            .map_err(|e| DetectionError::PathResolution {
                path: absolute,
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::classifier::StaticClassifier;
    use crate::fs::MockFileSystem;

    fn detector_with(files: &[(&str, &str)]) -> Detector {
        let fs = MockFileSystem::new();
        for (path, content) in files {
            fs.add_file(path, content);
        }
        Detector::with_filesystem(Box::new(fs))
    }

    fn detect(detector: &Detector) -> DetectionResult {
        detector.detect(Path::new("/mock")).unwrap()
    }

    #[test]
    fn test_go_module() {
        let detector = detector_with(&[("go.mod", "module x\n\ngo 1.22")]);

        assert_eq!(
            detect(&detector),
            DetectionResult {
                language: "go".to_string(),
                version: "1.22".to_string(),
                build_tool: "go".to_string(),
                image_tag: "golang:1.22-alpine".to_string(),
            }
        );
    }

    #[test]
    fn test_default_version_when_unpinned() {
        let detector = detector_with(&[("requirements.txt", "requests\n")]);
        let result = detect(&detector);

        assert_eq!(result.language, "python");
        assert_eq!(result.build_tool, "pip");
        assert_eq!(result.version, "3.12");
        assert_eq!(result.image_tag, "python:3.12-slim");
    }

    #[test]
    fn test_found_version_beats_default_even_if_odd() {
        let detector = detector_with(&[
            ("Cargo.toml", "[package]\n"),
            ("rust-toolchain", "nightly\n"),
        ]);
        let result = detect(&detector);

        assert_eq!(result.version, "nightly");
        assert_eq!(result.image_tag, "rust:nightly-alpine");
    }

    #[test]
    fn test_empty_directory_is_not_detected() {
        let detector = detector_with(&[]);
        let err = detector.detect(Path::new("/mock")).unwrap_err();

        assert!(matches!(err, DetectionError::NotDetected(ref p) if p == Path::new("/mock")));
    }

    #[test]
    fn test_missing_path_fails_before_classification() {
        let fs = MockFileSystem::new();
        let detector = Detector::with_parts(
            Box::new(fs),
            LanguageRegistry::with_defaults(),
            Some(Box::new(StaticClassifier::new([("Go", 10u64)]))),
            true,
        );

        let err = detector.detect(Path::new("/elsewhere")).unwrap_err();
        assert!(err.is_path_error());
        assert!(matches!(err, DetectionError::PathNotFound(_)));
    }

    #[test]
    fn test_file_path_is_not_a_directory() {
        let detector = detector_with(&[("go.mod", "module x")]);
        let err = detector.detect(Path::new("/mock/go.mod")).unwrap_err();

        assert!(matches!(err, DetectionError::NotADirectory(_)));
    }

    #[test]
    fn test_classifier_result_wins_over_indicators() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", r#"{"engines":{"node":"^20"}}"#);
        fs.add_file("tsconfig.json", "{}");
        let detector = Detector::with_parts(
            Box::new(fs),
            LanguageRegistry::with_defaults(),
            Some(Box::new(StaticClassifier::new([
                ("TypeScript", 9_000u64),
                ("JavaScript", 1_000),
            ]))),
            true,
        );

        let result = detect(&detector);
        assert_eq!(result.language, "typescript");
        assert_eq!(result.version, "20");
        assert_eq!(result.build_tool, "npm");
        assert_eq!(result.image_tag, "node:20-alpine");
    }

    #[test]
    fn test_unavailable_classifier_is_never_consulted() {
        let fs = MockFileSystem::new();
        fs.add_file("go.mod", "module x\n\ngo 1.21\n");
        let detector = Detector::with_parts(
            Box::new(fs),
            LanguageRegistry::with_defaults(),
            Some(Box::new(StaticClassifier::new([("Ruby", 1u64)]))),
            false,
        );

        assert_eq!(detect(&detector).language, "go");
    }

    #[test]
    fn test_failing_classifier_falls_back_to_indicators() {
        let fs = MockFileSystem::new();
        fs.add_file("Gemfile", "ruby '3.2.1'\n");
        let detector = Detector::with_parts(
            Box::new(fs),
            LanguageRegistry::with_defaults(),
            Some(Box::new(StaticClassifier::failing())),
            true,
        );

        let result = detect(&detector);
        assert_eq!(result.language, "ruby");
        assert_eq!(result.build_tool, "bundle");
        assert_eq!(result.image_tag, "ruby:3.2-alpine");
    }

    #[test]
    fn test_unregistered_language_gets_generic_tag() {
        let fs = MockFileSystem::new();
        fs.add_file("mix.exs", "");
        let detector = Detector::with_parts(
            Box::new(fs),
            LanguageRegistry::with_defaults(),
            Some(Box::new(StaticClassifier::new([("Elixir", 4096u64)]))),
            true,
        );

        assert_eq!(
            detect(&detector),
            DetectionResult {
                language: "elixir".to_string(),
                version: "latest".to_string(),
                build_tool: String::new(),
                image_tag: "elixir:latest-alpine".to_string(),
            }
        );
    }

    #[test]
    fn test_classifier_alias_maps_to_known_language() {
        let fs = MockFileSystem::new();
        fs.add_file("App.csproj", "<TargetFramework>net7.0</TargetFramework>");
        let detector = Detector::with_parts(
            Box::new(fs),
            LanguageRegistry::with_defaults(),
            Some(Box::new(StaticClassifier::new([("C#", 100u64)]))),
            true,
        );

        let result = detect(&detector);
        assert_eq!(result.language, "csharp");
        assert_eq!(result.build_tool, "dotnet");
        assert_eq!(result.image_tag, "mcr.microsoft.com/dotnet/sdk:7-alpine");
    }
}
