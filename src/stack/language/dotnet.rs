//! .NET / C#: SDK version from global.json or project target frameworks

use super::parsers::first_capture;
use super::{BuildToolId, LanguageResolver, ProjectDir};
use regex::Regex;
use serde_json::Value;

/// Project files searched for target frameworks, up to two levels deep.
const PROJECT_PATTERNS: &[&str] = &["*.csproj", "*/*.csproj", "*/*/*.csproj"];

pub struct DotNetResolver;

impl DotNetResolver {
    /// `sdk.version` of `global.json`: `8.0.100` becomes `8`, `8.1.100` stays `8.1`.
    /// A bare major such as `8` is not enough and yields `None`.
    fn global_json_sdk(content: &str) -> Option<String> {
        let manifest: Value = serde_json::from_str(content).ok()?;
        let version = manifest
            .get("sdk")
            .and_then(|sdk| sdk.get("version"))
            .and_then(Value::as_str)?;

        let mut parts = version.trim().split('.');
        let major = parts.next().filter(|m| !m.is_empty())?;
        match parts.next() {
            None | Some("") => None,
            Some("0") => Some(major.to_string()),
            Some(minor) => Some(format!("{}.{}", major, minor)),
        }
    }

    /// All modern (`netX.Y`, X >= 5) target frameworks declared by a project file.
    fn target_frameworks(content: &str) -> Vec<(u32, u32)> {
        let mut monikers: Vec<String> = Vec::new();
        if let Some(list) = first_capture(r"<TargetFrameworks>([^<]+)</TargetFrameworks>", content) {
            monikers.extend(list.split(';').map(|m| m.trim().to_string()));
        }
        if let Some(single) = first_capture(r"<TargetFramework>([^<]+)</TargetFramework>", content) {
            monikers.push(single.trim().to_string());
        }

        let Ok(re) = Regex::new(r"^net(\d+)\.(\d+)$") else {
            return Vec::new();
        };
        monikers
            .iter()
            .filter_map(|moniker| re.captures(moniker))
            .filter_map(|caps| {
                let major = caps.get(1)?.as_str().parse::<u32>().ok()?;
                let minor = caps.get(2)?.as_str().parse::<u32>().ok()?;
                Some((major, minor))
            })
            .filter(|(major, _)| *major >= 5)
            .collect()
    }

    fn highest_target(project: &ProjectDir<'_>) -> Option<String> {
        let (major, minor) = PROJECT_PATTERNS
            .iter()
            .flat_map(|pattern| project.glob(pattern))
            .filter_map(|path| project.read_path(&path))
            .flat_map(|content| Self::target_frameworks(&content))
            .max()?;

        if minor == 0 {
            Some(major.to_string())
        } else {
            Some(format!("{}.{}", major, minor))
        }
    }
}

impl LanguageResolver for DotNetResolver {
    fn build_tool(&self, _project: &ProjectDir<'_>) -> BuildToolId {
        BuildToolId::DotNet
    }

    fn version(&self, project: &ProjectDir<'_>, _build_tool: &BuildToolId) -> Option<String> {
        project
            .read("global.json")
            .and_then(|content| Self::global_json_sdk(&content))
            .or_else(|| Self::highest_target(project))
    }
}
