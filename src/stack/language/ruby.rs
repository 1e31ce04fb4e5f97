use super::parsers::{first_capture, pin_value};
use super::{BuildToolId, LanguageResolver, ProjectDir};

pub struct RubyResolver;

impl LanguageResolver for RubyResolver {
    fn build_tool(&self, _project: &ProjectDir<'_>) -> BuildToolId {
        BuildToolId::Bundle
    }

    fn version(&self, project: &ProjectDir<'_>, _build_tool: &BuildToolId) -> Option<String> {
        if let Some(pinned) = project
            .read(".ruby-version")
            .and_then(|content| pin_value(&content, Some("ruby-")))
        {
            return Some(pinned);
        }

        project
            .read("Gemfile")
            .and_then(|content| first_capture(r#"(?m)^\s*ruby\s+['"](\d+\.\d+)"#, &content))
    }
}
