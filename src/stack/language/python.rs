//! Python: pip, pipenv, poetry, pdm, hatch, uv

use super::parsers::{first_capture, major_minor, pin_value};
use super::{BuildToolId, LanguageResolver, ProjectDir};

/// Lockfiles checked when `pyproject.toml` names no tool section.
const LOCKFILES: &[(&str, BuildToolId)] = &[
    ("poetry.lock", BuildToolId::Poetry),
    ("pdm.lock", BuildToolId::Pdm),
    ("uv.lock", BuildToolId::Uv),
    ("Pipfile.lock", BuildToolId::Pipenv),
];

pub struct PythonResolver;

impl PythonResolver {
    fn tool_from_pyproject(content: &str) -> Option<BuildToolId> {
        if content.contains("[tool.poetry") {
            Some(BuildToolId::Poetry)
        } else if content.contains("[tool.pdm") {
            Some(BuildToolId::Pdm)
        } else if content.contains("[tool.hatch") {
            Some(BuildToolId::Hatch)
        } else if content.contains("[tool.uv") {
            Some(BuildToolId::Uv)
        } else {
            None
        }
    }

    fn pyproject_requirement(content: &str) -> Option<String> {
        first_capture(r#"python\s*=\s*["']([^"']+)["']"#, content)
            .or_else(|| first_capture(r#"requires-python\s*=\s*["']([^"']+)["']"#, content))
            .and_then(|range| major_minor(&range))
    }
}

impl LanguageResolver for PythonResolver {
    fn build_tool(&self, project: &ProjectDir<'_>) -> BuildToolId {
        if let Some(tool) = project
            .read("pyproject.toml")
            .and_then(|content| Self::tool_from_pyproject(&content))
        {
            return tool;
        }

        LOCKFILES
            .iter()
            .find(|(name, _)| project.exists(name))
            .map(|(_, tool)| tool.clone())
            .unwrap_or_else(|| {
                if project.exists("Pipfile") {
                    BuildToolId::Pipenv
                } else {
                    BuildToolId::Pip
                }
            })
    }

    fn version(&self, project: &ProjectDir<'_>, build_tool: &BuildToolId) -> Option<String> {
        if let Some(pinned) = project
            .read(".python-version")
            .and_then(|content| pin_value(&content, None))
        {
            return Some(pinned);
        }

        let pyproject_tool = matches!(
            build_tool,
            BuildToolId::Poetry | BuildToolId::Pdm | BuildToolId::Hatch
        );
        if pyproject_tool {
            if let Some(version) = project
                .read("pyproject.toml")
                .and_then(|content| Self::pyproject_requirement(&content))
            {
                return Some(version);
            }
        }

        project
            .read("runtime.txt")
            .and_then(|content| first_capture(r"python-(\d+\.\d+)", &content))
    }
}
