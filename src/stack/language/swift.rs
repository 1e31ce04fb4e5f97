use super::parsers::first_capture;
use super::{BuildToolId, LanguageResolver, ProjectDir};

pub struct SwiftResolver;

impl LanguageResolver for SwiftResolver {
    fn build_tool(&self, _project: &ProjectDir<'_>) -> BuildToolId {
        BuildToolId::Swift
    }

    /// `swift-tools-version` header of `Package.swift`.
    fn version(&self, project: &ProjectDir<'_>, _build_tool: &BuildToolId) -> Option<String> {
        project
            .read("Package.swift")
            .and_then(|content| first_capture(r"swift-tools-version:\s*(\d+\.\d+)", &content))
    }
}
