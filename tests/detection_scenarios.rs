//! End-to-end detection against real directories.

mod support;

use stackradar::cli::output::{OutputFormat, OutputFormatter, TechStack};
use stackradar::detection::StaticClassifier;
use stackradar::fs::RealFileSystem;
use stackradar::{DetectionError, Detector, LanguageRegistry};
use support::{csproj, detector, repo};
use yare::parameterized;

#[test]
fn test_go_module_scenario() {
    let dir = repo(&[("go.mod", "module x\n\ngo 1.22")]);
    let result = detector().detect(dir.path()).unwrap();

    assert_eq!(result.language, "go");
    assert_eq!(result.build_tool, "go");
    assert_eq!(result.version, "1.22");
    assert_eq!(result.image_tag, "golang:1.22-alpine");
}

#[test]
fn test_requirements_only_uses_default_version() {
    let dir = repo(&[("requirements.txt", "flask\n")]);
    let result = detector().detect(dir.path()).unwrap();

    assert_eq!(result.language, "python");
    assert_eq!(result.build_tool, "pip");
    assert_eq!(result.version, "3.12");
    assert_eq!(result.image_tag, "python:3.12-slim");
}

#[test]
fn test_node_engines_scenario() {
    let dir = repo(&[("package.json", r#"{"engines":{"node":">=18.0.0"}}"#)]);
    let result = detector().detect(dir.path()).unwrap();

    assert_eq!(result.language, "node");
    assert_eq!(result.version, "18");
    assert_eq!(result.build_tool, "npm");
    assert_eq!(result.image_tag, "node:18-alpine");
}

#[test]
fn test_two_csproj_files_pick_highest_framework() {
    let net6 = csproj("<TargetFramework>net6.0</TargetFramework>");
    let net8 = csproj("<TargetFramework>net8.0</TargetFramework>");
    let dir = repo(&[("Api/Api.csproj", &net6), ("Worker/Worker.csproj", &net8)]);
    let result = detector().detect(dir.path()).unwrap();

    assert_eq!(result.language, "dotnet");
    assert_eq!(result.build_tool, "dotnet");
    assert_eq!(result.version, "8");
    assert_eq!(result.image_tag, "mcr.microsoft.com/dotnet/sdk:8-alpine");
}

#[test]
fn test_empty_directory_is_not_detected() {
    let dir = repo(&[]);
    let err = detector().detect(dir.path()).unwrap_err();

    assert!(matches!(err, DetectionError::NotDetected(_)));
    assert!(!err.is_path_error());
}

#[test]
fn test_nonexistent_path_is_a_path_error() {
    let dir = repo(&[]);
    let missing = dir.path().join("does-not-exist");
    let err = detector().detect(&missing).unwrap_err();

    assert!(err.is_path_error());
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn test_file_path_is_a_path_error() {
    let dir = repo(&[("go.mod", "module x\n")]);
    let err = detector().detect(&dir.path().join("go.mod")).unwrap_err();

    assert!(matches!(err, DetectionError::NotADirectory(_)));
}

#[parameterized(
    python = { "pyproject.toml", "[project]\nname = \"x\"\n", "python", "pip" },
    java = { "pom.xml", "<project/>", "java", "maven" },
    kotlin = { "build.gradle.kts", "plugins { kotlin(\"jvm\") version \"1.9.0\" }", "kotlin", "gradle" },
    node = { "package.json", "{}", "node", "npm" },
    typescript = { "tsconfig.json", "{}", "typescript", "npm" },
    go = { "go.mod", "module x\n", "go", "go" },
    rust = { "Cargo.toml", "[package]\nname = \"x\"\n", "rust", "cargo" },
    ruby = { "Gemfile", "source 'https://rubygems.org'\n", "ruby", "bundle" },
    php = { "composer.json", "{}", "php", "composer" },
    dotnet = { "App.sln", "", "dotnet", "dotnet" },
    swift = { "Package.swift", "// swift-tools-version:5.10\n", "swift", "swift" },
    scala = { "build.sbt", "name := \"x\"\n", "scala", "sbt" },
)]
fn test_unique_indicator_classifies(file: &str, content: &str, language: &str, build_tool: &str) {
    let dir = repo(&[(file, content)]);
    let result = detector().detect(dir.path()).unwrap();

    assert_eq!(result.language, language);
    assert_eq!(result.build_tool, build_tool);
    assert!(!result.version.is_empty());
    assert!(!result.image_tag.is_empty());
}

#[test]
fn test_gradle_scripts_of_both_dsls_resolve_to_kotlin() {
    let dir = repo(&[
        ("build.gradle", "apply plugin: 'java'\n"),
        ("build.gradle.kts", "plugins { kotlin(\"jvm\") version \"1.9.22\" }\n"),
    ]);
    let result = detector().detect(dir.path()).unwrap();

    assert_eq!(result.language, "kotlin");
    assert_eq!(result.version, "1.9.22");
    assert_eq!(result.image_tag, "eclipse-temurin:1.9.22-jdk-alpine");
}

#[test]
fn test_pinned_versions_flow_into_tag() {
    let dir = repo(&[
        ("pyproject.toml", "[tool.poetry.dependencies]\npython = \"^3.11\"\n"),
        ("poetry.lock", ""),
    ]);
    let result = detector().detect(dir.path()).unwrap();

    assert_eq!(result.build_tool, "poetry");
    assert_eq!(result.image_tag, "python:3.11-slim");
}

#[test]
fn test_relative_paths_are_resolved() {
    let result = detector().detect(std::path::Path::new(".")).unwrap();

    // The crate root has Cargo.toml and no higher-priority indicator.
    assert_eq!(result.language, "rust");
    assert_eq!(result.build_tool, "cargo");
}

#[test]
fn test_external_classifier_overrides_indicators() {
    let dir = repo(&[("package.json", "{}"), ("src/index.ts", "export {}")]);
    let detector = Detector::with_parts(
        Box::new(RealFileSystem),
        LanguageRegistry::with_defaults(),
        Some(Box::new(StaticClassifier::new([
            ("TypeScript", 1_200u64),
            ("JavaScript", 80),
        ]))),
        true,
    );

    let result = detector.detect(dir.path()).unwrap();
    assert_eq!(result.language, "typescript");
    assert_eq!(result.image_tag, "node:20-alpine");
}

#[test]
fn test_image_tag_is_deterministic() {
    let dir = repo(&[("Gemfile", "ruby \"3.2.2\"\n")]);
    let first = detector().detect(dir.path()).unwrap();
    let second = detector().detect(dir.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.image_tag, "ruby:3.2-alpine");
}

#[test]
fn test_multiline_pin_file_keeps_env_output_intact() {
    let dir = repo(&[
        ("requirements.txt", "flask\n"),
        (".python-version", "3.11.4\n3.10.13\n"),
    ]);
    let result = detector().detect(dir.path()).unwrap();
    assert_eq!(result.version, "3.11.4");
    assert_eq!(result.image_tag, "python:3.11.4-slim");

    let stack = TechStack::from(result);
    let env = OutputFormatter::new(OutputFormat::Env).format(&stack).unwrap();
    assert_eq!(env.lines().count(), 4);
    assert_eq!(TechStack::parse(&env, OutputFormat::Env).unwrap(), stack);
}
