use super::LanguageId;

/// Placeholder substituted with the resolved version when rendering an image tag.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Version used when a language has neither a detected nor a configured version.
pub const FALLBACK_VERSION: &str = "latest";

/// Static description of one supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    pub id: LanguageId,
    /// Exact file names or glob patterns whose presence implies the language.
    pub indicators: &'static [&'static str],
    /// Container image reference with a single `{version}` placeholder.
    pub image_template: &'static str,
    pub default_version: &'static str,
}

impl LanguageProfile {
    pub const fn new(
        id: LanguageId,
        indicators: &'static [&'static str],
        image_template: &'static str,
        default_version: &'static str,
    ) -> Self {
        Self {
            id,
            indicators,
            image_template,
            default_version,
        }
    }

    pub fn render_tag(&self, version: &str) -> String {
        self.image_template.replace(VERSION_PLACEHOLDER, version)
    }
}

const DOTNET_INDICATORS: &[&str] = &["*.csproj", "*.sln", "*.slnx", "*/*.csproj"];
const NODE_TEMPLATE: &str = "node:{version}-alpine";
const TEMURIN_TEMPLATE: &str = "eclipse-temurin:{version}-jdk-alpine";
const DOTNET_TEMPLATE: &str = "mcr.microsoft.com/dotnet/sdk:{version}-alpine";

/// Ordered, read-only table of language profiles.
///
/// Declaration order is the fallback classification priority: the first
/// profile with a matching indicator wins.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    profiles: Vec<LanguageProfile>,
}

impl LanguageRegistry {
    pub fn new(profiles: Vec<LanguageProfile>) -> Self {
        Self { profiles }
    }

    pub fn with_defaults() -> Self {
        let profile = LanguageProfile::new;

        Self::new(vec![
            profile(
                LanguageId::Python,
                &["requirements.txt", "setup.py", "pyproject.toml", "Pipfile"],
                "python:{version}-slim",
                "3.12",
            ),
            // Kotlin DSL scripts are claimed before the broader Java list.
            profile(LanguageId::Kotlin, &["build.gradle.kts"], TEMURIN_TEMPLATE, "17"),
            profile(
                LanguageId::Java,
                &["pom.xml", "build.gradle", "build.gradle.kts"],
                TEMURIN_TEMPLATE,
                "17",
            ),
            profile(LanguageId::Node, &["package.json"], NODE_TEMPLATE, "20"),
            profile(LanguageId::JavaScript, &["package.json"], NODE_TEMPLATE, "20"),
            profile(
                LanguageId::TypeScript,
                &["tsconfig.json", "package.json"],
                NODE_TEMPLATE,
                "20",
            ),
            profile(LanguageId::Go, &["go.mod"], "golang:{version}-alpine", "1.22"),
            profile(LanguageId::Rust, &["Cargo.toml"], "rust:{version}-alpine", "1.75"),
            profile(LanguageId::Ruby, &["Gemfile"], "ruby:{version}-alpine", "3.3"),
            profile(
                LanguageId::Php,
                &["composer.json"],
                "php:{version}-cli-alpine",
                "8.3",
            ),
            profile(LanguageId::DotNet, DOTNET_INDICATORS, DOTNET_TEMPLATE, "8.0"),
            profile(LanguageId::CSharp, DOTNET_INDICATORS, DOTNET_TEMPLATE, "8.0"),
            profile(LanguageId::Swift, &["Package.swift"], "swift:{version}", "5.9"),
            profile(LanguageId::Scala, &["build.sbt"], TEMURIN_TEMPLATE, "17"),
        ])
    }

    pub fn get(&self, id: &LanguageId) -> Option<&LanguageProfile> {
        self.profiles.iter().find(|p| &p.id == id)
    }

    /// Looks a profile up by free-form name (case-insensitive, alias-aware).
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageProfile> {
        LanguageId::from_name(name).and_then(|id| self.get(&id))
    }

    /// Profiles in priority order.
    pub fn profiles(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.profiles.iter()
    }

    pub fn language_ids(&self) -> Vec<&LanguageId> {
        self.profiles.iter().map(|p| &p.id).collect()
    }

    /// Default version for `id`, or `latest` when the language is unregistered.
    pub fn default_version(&self, id: &LanguageId) -> &str {
        self.get(id)
            .map(|p| p.default_version)
            .filter(|v| !v.is_empty())
            .unwrap_or(FALLBACK_VERSION)
    }

    /// Renders the image tag for `(id, version)`. Unregistered languages get
    /// `<name>:<version>-alpine`.
    pub fn render_tag(&self, id: &LanguageId, version: &str) -> String {
        match self.get(id) {
            Some(profile) if !profile.image_template.is_empty() => profile.render_tag(version),
            _ => format!("{}:{}-alpine", id, version),
        }
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
