//! Rust: toolchain pins for cargo projects

use super::parsers::{first_capture, pin_value};
use super::{BuildToolId, LanguageResolver, ProjectDir};
use tracing::debug;

pub struct RustResolver;

impl RustResolver {
    /// `[toolchain] channel` of a TOML toolchain file.
    fn toolchain_channel(content: &str) -> Option<String> {
        match toml::from_str::<toml::Table>(content) {
            Ok(value) => value
                .get("toolchain")
                .and_then(|toolchain| toolchain.get("channel"))
                .and_then(toml::Value::as_str)
                .and_then(|channel| pin_value(channel, None)),
            Err(e) => {
                debug!(error = %e, "rust-toolchain file is not valid TOML, scanning text");
                first_capture(r#"channel\s*=\s*["']([^"']+)["']"#, content)
            }
        }
    }
}

impl LanguageResolver for RustResolver {
    fn build_tool(&self, _project: &ProjectDir<'_>) -> BuildToolId {
        BuildToolId::Cargo
    }

    fn version(&self, project: &ProjectDir<'_>, _build_tool: &BuildToolId) -> Option<String> {
        // Legacy `rust-toolchain` may hold either a bare channel or TOML.
        if let Some(content) = project.read("rust-toolchain") {
            let version = if content.contains("[toolchain]") {
                Self::toolchain_channel(&content)
            } else {
                pin_value(&content, None)
            };
            if version.is_some() {
                return version;
            }
        }

        project
            .read("rust-toolchain.toml")
            .and_then(|content| Self::toolchain_channel(&content))
    }
}
