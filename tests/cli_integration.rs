//! Runs the compiled binary against temporary repositories.

mod support;

use stackradar::cli::output::{OutputFormat, TechStack};
use std::fs;
use std::process::{Command, Output};
use support::{path_str, repo};
use yare::parameterized;

fn stackradar_bin() -> &'static str {
    env!("CARGO_BIN_EXE_stackradar")
}

/// Runs the binary with the external classifier disabled so results depend
/// only on the files in the fixture.
fn run(args: &[&str]) -> Output {
    Command::new(stackradar_bin())
        .args(args)
        .env("STACKRADAR_CLASSIFIER_ENABLED", "false")
        .env_remove("STACKRADAR_CLASSIFIER")
        .env_remove("STACKRADAR_LOG_LEVEL")
        .env_remove("STACKRADAR_LOG_JSON")
        .output()
        .expect("Failed to execute stackradar")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn go_repo() -> tempfile::TempDir {
    repo(&[("go.mod", "module example.com/app\n\ngo 1.22\n")])
}

fn assert_go_stack(stack: &TechStack) {
    assert_eq!(stack.language.name, "go");
    assert_eq!(stack.language.version, "1.22");
    assert_eq!(stack.language.build_tool, "go");
    assert_eq!(stack.language.ci_image_tag, "golang:1.22-alpine");
}

#[test]
fn test_help_lists_subcommands() {
    let output = run(&["--help"]);
    assert!(output.status.success());

    let help = stdout(&output);
    assert!(help.contains("get"));
    assert!(help.contains("check"));
}

#[test]
fn test_version_flag() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[parameterized(
    yaml = { "yaml", OutputFormat::Yaml },
    json = { "json", OutputFormat::Json },
    env = { "env", OutputFormat::Env },
)]
fn test_get_formats(flag: &str, format: OutputFormat) {
    let dir = go_repo();
    let path = path_str(dir.path());

    let output = run(&["get", "-q", "--path", &path, "--format", flag]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stack = TechStack::parse(&stdout(&output), format).unwrap();
    assert_go_stack(&stack);
}

#[test]
fn test_default_format_is_yaml() {
    let dir = go_repo();
    let path = path_str(dir.path());

    let output = run(&["get", "-q", "-p", &path]);
    assert!(output.status.success());

    let stack = TechStack::parse(&stdout(&output), OutputFormat::Yaml).unwrap();
    assert_go_stack(&stack);
}

#[test]
fn test_banner_stays_off_stdout() {
    let dir = go_repo();
    let path = path_str(dir.path());

    let output = run(&["get", "-p", &path, "-f", "env"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("TechStack Detector"));
    assert!(stdout(&output).starts_with("LANGUAGE_NAME=go\n"));
}

#[test]
fn test_output_file() {
    let dir = go_repo();
    let out_dir = repo(&[]);
    let out_file = out_dir.path().join("stack.env");
    let path = path_str(dir.path());
    let out = path_str(&out_file);

    let output = run(&["get", "-p", &path, "-f", "env", "-o", &out]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Output written to"));

    let written = fs::read_to_string(&out_file).unwrap();
    assert_go_stack(&TechStack::parse(&written, OutputFormat::Env).unwrap());
}

#[test]
fn test_directory_overrides_path() {
    let go = go_repo();
    let ruby = repo(&[("Gemfile", "source 'https://rubygems.org'\nruby '3.2.2'\n")]);
    let go_path = path_str(go.path());
    let ruby_path = path_str(ruby.path());

    let output = run(&["get", "-q", "-p", &go_path, "-d", &ruby_path, "-f", "json"]);
    assert!(output.status.success());

    let stack = TechStack::parse(&stdout(&output), OutputFormat::Json).unwrap();
    assert_eq!(stack.language.name, "ruby");
    assert_eq!(stack.language.ci_image_tag, "ruby:3.2-alpine");
}

#[test]
fn test_undetectable_repository_fails() {
    let dir = repo(&[("README.md", "# nothing to see\n")]);
    let path = path_str(dir.path());

    let output = run(&["get", "-p", &path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("stackradar check"));
}

#[test]
fn test_missing_path_fails() {
    let dir = repo(&[]);
    let missing = dir.path().join("nope");
    let path = path_str(&missing);

    let output = run(&["get", "-q", "-p", &path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("does not exist"));
}

#[test]
fn test_check_human() {
    let output = run(&["check"]);
    assert!(output.status.success());

    let report = stdout(&output);
    assert!(report.contains("Checking dependencies..."));
    assert!(report.contains("Disabled"));
    assert!(report.contains("Stackradar Configuration:"));
}

#[test]
fn test_check_json() {
    let output = run(&["check", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["classifier"]["enabled"], false);
    assert_eq!(value["classifier"]["available"], false);
    assert_eq!(value["configuration"]["classifier_program"], "github-linguist");
}

#[test]
fn test_check_with_missing_program_still_succeeds() {
    let output = Command::new(stackradar_bin())
        .args(["check", "-f", "yaml"])
        .env("STACKRADAR_CLASSIFIER", "stackradar-no-such-linguist")
        .env_remove("STACKRADAR_CLASSIFIER_ENABLED")
        .output()
        .expect("Failed to execute stackradar");

    assert!(output.status.success());
    assert!(stdout(&output).contains("available: false"));
}

#[test]
fn test_relative_path_from_working_directory() {
    let dir = go_repo();

    let output = Command::new(stackradar_bin())
        .current_dir(dir.path())
        .args(["get", "-q", "-f", "env"])
        .env("STACKRADAR_CLASSIFIER_ENABLED", "false")
        .output()
        .expect("Failed to execute stackradar");

    assert!(output.status.success());
    assert_go_stack(&TechStack::parse(&stdout(&output), OutputFormat::Env).unwrap());
}
