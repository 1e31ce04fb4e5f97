//! Node.js family (node, javascript, typescript): npm, pnpm, yarn, bun

use super::parsers::{major_only, pin_value};
use super::{BuildToolId, LanguageResolver, ProjectDir};
use serde_json::Value;
use tracing::debug;

/// Lockfile to package manager, in precedence order.
const LOCKFILES: &[(&str, BuildToolId)] = &[
    ("pnpm-lock.yaml", BuildToolId::Pnpm),
    ("yarn.lock", BuildToolId::Yarn),
    ("package-lock.json", BuildToolId::Npm),
    ("bun.lockb", BuildToolId::Bun),
];

pub struct JavaScriptResolver;

impl JavaScriptResolver {
    fn engines_node(package_json: &str) -> Option<String> {
        let manifest: Value = match serde_json::from_str(package_json) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "package.json is not valid JSON");
                return None;
            }
        };

        manifest
            .get("engines")
            .and_then(|engines| engines.get("node"))
            .and_then(Value::as_str)
            .and_then(major_only)
    }
}

impl LanguageResolver for JavaScriptResolver {
    fn build_tool(&self, project: &ProjectDir<'_>) -> BuildToolId {
        LOCKFILES
            .iter()
            .find(|(name, _)| project.exists(name))
            .map(|(_, tool)| tool.clone())
            .unwrap_or(BuildToolId::Npm)
    }

    fn version(&self, project: &ProjectDir<'_>, _build_tool: &BuildToolId) -> Option<String> {
        if let Some(pinned) = project
            .read(".nvmrc")
            .and_then(|content| pin_value(&content, Some("v")))
        {
            return Some(pinned);
        }

        if let Some(engine) = project
            .read("package.json")
            .and_then(|content| Self::engines_node(&content))
        {
            return Some(engine);
        }

        project
            .read(".node-version")
            .and_then(|content| pin_value(&content, Some("v")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use yare::parameterized;

    fn resolve(fs: &MockFileSystem) -> (BuildToolId, Option<String>) {
        let project = ProjectDir::new(fs, fs.root());
        let tool = JavaScriptResolver.build_tool(&project);
        let version = JavaScriptResolver.version(&project, &tool);
        (tool, version)
    }

    #[parameterized(
        gte = { ">=18.0.0", "18" },
        caret = { "^20.11", "20" },
        tilde = { "~16", "16" },
        bare = { "22.x", "22" },
        compound = { ">=18 <21", "18" },
    )]
    fn test_engines_node(range: &str, expected: &str) {
        let fs = MockFileSystem::new();
        fs.add_file(
            "package.json",
            &format!(r#"{{"name":"app","engines":{{"node":"{}"}}}}"#, range),
        );

        assert_eq!(resolve(&fs), (BuildToolId::Npm, Some(expected.to_string())));
    }

    #[parameterized(
        pnpm = { "pnpm-lock.yaml", BuildToolId::Pnpm },
        yarn = { "yarn.lock", BuildToolId::Yarn },
        npm = { "package-lock.json", BuildToolId::Npm },
        bun = { "bun.lockb", BuildToolId::Bun },
    )]
    fn test_lockfile_selects_manager(lockfile: &str, expected: BuildToolId) {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", "{}");
        fs.add_file(lockfile, "");

        assert_eq!(resolve(&fs).0, expected);
    }

    #[test]
    fn test_pnpm_wins_over_other_lockfiles() {
        let fs = MockFileSystem::new();
        fs.add_file("package-lock.json", "{}");
        fs.add_file("yarn.lock", "");
        fs.add_file("pnpm-lock.yaml", "");

        assert_eq!(resolve(&fs).0, BuildToolId::Pnpm);
    }

    #[test]
    fn test_nvmrc_precedes_engines() {
        let fs = MockFileSystem::new();
        fs.add_file(".nvmrc", "v20.10.0\n");
        fs.add_file("package.json", r#"{"engines":{"node":">=18"}}"#);

        assert_eq!(resolve(&fs).1, Some("20.10.0".to_string()));
    }

    #[test]
    fn test_node_version_file_is_last_resort() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", r#"{"name":"app"}"#);
        fs.add_file(".node-version", "18.19.0");

        assert_eq!(resolve(&fs).1, Some("18.19.0".to_string()));
    }

    #[test]
    fn test_invalid_package_json_is_ignored() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", "{ not json");

        assert_eq!(resolve(&fs), (BuildToolId::Npm, None));
    }
}
