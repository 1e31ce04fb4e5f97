//! Kotlin: Gradle (Kotlin or Groovy DSL), occasionally Maven

use super::parsers::first_capture_of;
use super::{BuildToolId, LanguageResolver, ProjectDir};

const GRADLE_SCRIPTS: &[&str] = &["build.gradle.kts", "build.gradle"];

const PLUGIN_PATTERNS: &[&str] = &[
    r#"kotlin\("jvm"\)\s+version\s+"([\d.]+)""#,
    r#"org\.jetbrains\.kotlin\.jvm['"]?\)?\s+version\s+['"]([\d.]+)['"]"#,
];

/// Reports the Kotlin plugin version, which pins the compiler.
pub struct KotlinResolver;

impl LanguageResolver for KotlinResolver {
    fn build_tool(&self, project: &ProjectDir<'_>) -> BuildToolId {
        if project.any_exists(GRADLE_SCRIPTS) {
            BuildToolId::Gradle
        } else if project.exists("pom.xml") {
            BuildToolId::Maven
        } else {
            BuildToolId::Gradle
        }
    }

    fn version(&self, project: &ProjectDir<'_>, build_tool: &BuildToolId) -> Option<String> {
        if *build_tool != BuildToolId::Gradle {
            return None;
        }
        GRADLE_SCRIPTS.iter().find_map(|script| {
            project
                .read(script)
                .and_then(|content| first_capture_of(PLUGIN_PATTERNS, &content))
        })
    }
}
