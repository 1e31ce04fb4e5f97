//! Scala: sbt, or Gradle with the scala plugin

use super::parsers::{first_capture, first_capture_of};
use super::{BuildToolId, LanguageResolver, ProjectDir};

const GRADLE_SCRIPTS: &[&str] = &["build.gradle", "build.gradle.kts"];

/// Plugin version declaration, then the Scala standard library dependency.
const GRADLE_PATTERNS: &[&str] = &[
    r#"scala\s+plugin.*version\s+"(\d+\.\d+)""#,
    r"org\.scala-lang:scala3?-library(?:_3)?:(\d+\.\d+)",
];

pub struct ScalaResolver;

impl LanguageResolver for ScalaResolver {
    fn build_tool(&self, project: &ProjectDir<'_>) -> BuildToolId {
        if project.exists("build.sbt") {
            BuildToolId::Sbt
        } else if project.any_exists(GRADLE_SCRIPTS) {
            BuildToolId::Gradle
        } else {
            BuildToolId::Sbt
        }
    }

    fn version(&self, project: &ProjectDir<'_>, build_tool: &BuildToolId) -> Option<String> {
        match build_tool {
            BuildToolId::Sbt => project
                .read("build.sbt")
                .and_then(|content| first_capture(r#"scalaVersion\s*:=\s*"(\d+\.\d+)"#, &content)),
            BuildToolId::Gradle => GRADLE_SCRIPTS.iter().find_map(|script| {
                project
                    .read(script)
                    .and_then(|content| first_capture_of(GRADLE_PATTERNS, &content))
            }),
            _ => None,
        }
    }
}
