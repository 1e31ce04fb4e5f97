use super::parsers::first_capture;
use super::{BuildToolId, LanguageResolver, ProjectDir};

pub struct GoResolver;

impl LanguageResolver for GoResolver {
    fn build_tool(&self, _project: &ProjectDir<'_>) -> BuildToolId {
        BuildToolId::Go
    }

    /// `go` directive of `go.mod`, trimmed to major.minor.
    fn version(&self, project: &ProjectDir<'_>, _build_tool: &BuildToolId) -> Option<String> {
        project
            .read("go.mod")
            .and_then(|content| first_capture(r"(?m)^\s*go\s+(\d+\.\d+)", &content))
    }
}
