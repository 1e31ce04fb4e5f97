//! Java: Maven and Gradle

use super::parsers::{first_capture, first_capture_of};
use super::{BuildToolId, LanguageResolver, ProjectDir};
use tracing::debug;

/// Maven properties carrying the Java level, in precedence order.
const MAVEN_PROPERTIES: &[&str] = &["maven.compiler.source", "maven.compiler.release", "java.version"];

const GRADLE_SCRIPTS: &[&str] = &["build.gradle", "build.gradle.kts"];

const GRADLE_PATTERNS: &[&str] = &[
    r#"sourceCompatibility\s*=\s*['"]?(?:1\.)?(\d+)"#,
    r"JavaVersion\.VERSION_(?:1_)?(\d+)",
    r"JavaLanguageVersion\.of\(\s*(\d+)\s*\)",
];

pub struct JavaResolver;

impl JavaResolver {
    fn maven_version(pom: &str) -> Option<String> {
        match roxmltree::Document::parse(pom) {
            Ok(doc) => MAVEN_PROPERTIES.iter().find_map(|property| {
                let raw = pom_property(&doc, property)?;
                match property_reference(raw) {
                    Some(reference) => pom_property(&doc, reference).and_then(java_level),
                    None => java_level(raw),
                }
            }),
            Err(e) => {
                debug!(error = %e, "pom.xml is not well-formed, scanning text");
                MAVEN_PROPERTIES.iter().find_map(|property| {
                    let pattern = format!(r"<{}>\s*([^<\s]+)\s*</", regex::escape(property));
                    first_capture(&pattern, pom).and_then(|v| java_level(&v))
                })
            }
        }
    }

    fn gradle_version(project: &ProjectDir<'_>) -> Option<String> {
        GRADLE_SCRIPTS.iter().find_map(|script| {
            project
                .read(script)
                .and_then(|content| first_capture_of(GRADLE_PATTERNS, &content))
        })
    }
}

/// Trimmed text of the first element named `name`, namespace ignored.
fn pom_property<'a>(doc: &'a roxmltree::Document<'_>, name: &str) -> Option<&'a str> {
    doc.descendants()
        .find(|node| node.is_element() && node.tag_name().name() == name)
        .and_then(|node| node.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// `${java.version}` yields `java.version`.
fn property_reference(value: &str) -> Option<&str> {
    value.strip_prefix("${")?.strip_suffix('}')
}

/// Leading Java level of a property value; `1.8` style levels become `8`.
/// Anything else, such as an unresolved placeholder, is rejected.
fn java_level(value: &str) -> Option<String> {
    first_capture(r"^(?:1\.)?(\d+)", value.trim())
}

impl LanguageResolver for JavaResolver {
    fn build_tool(&self, project: &ProjectDir<'_>) -> BuildToolId {
        if project.exists("pom.xml") {
            BuildToolId::Maven
        } else if project.any_exists(GRADLE_SCRIPTS) {
            BuildToolId::Gradle
        } else {
            BuildToolId::Maven
        }
    }

    fn version(&self, project: &ProjectDir<'_>, build_tool: &BuildToolId) -> Option<String> {
        match build_tool {
            BuildToolId::Maven => project
                .read("pom.xml")
                .and_then(|pom| Self::maven_version(&pom)),
            BuildToolId::Gradle => Self::gradle_version(project),
            _ => None,
        }
    }
}
