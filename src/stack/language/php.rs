use super::parsers::major_minor;
use super::{BuildToolId, LanguageResolver, ProjectDir};
use serde_json::Value;

pub struct PhpResolver;

impl LanguageResolver for PhpResolver {
    fn build_tool(&self, _project: &ProjectDir<'_>) -> BuildToolId {
        BuildToolId::Composer
    }

    /// `require.php` constraint of `composer.json`, as major.minor.
    fn version(&self, project: &ProjectDir<'_>, _build_tool: &BuildToolId) -> Option<String> {
        let manifest: Value = project
            .read("composer.json")
            .and_then(|content| serde_json::from_str(&content).ok())?;

        manifest
            .get("require")
            .and_then(|require| require.get("php"))
            .and_then(Value::as_str)
            .and_then(major_minor)
    }
}
