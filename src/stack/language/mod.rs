//! Per-language build tool and version resolvers.
//!
//! Each resolver reads a small, well-known set of project files and extracts
//! a build tool and a language/runtime version. Missing or unparseable files
//! are never errors: the resolver simply reports nothing and the detector
//! falls back to the registry's default version.

mod dotnet;
mod go;
mod java;
mod javascript;
mod kotlin;
pub mod parsers;
mod php;
mod python;
mod ruby;
mod rust;
mod scala;
mod swift;

pub use dotnet::DotNetResolver;
pub use go::GoResolver;
pub use java::JavaResolver;
pub use javascript::JavaScriptResolver;
pub use kotlin::KotlinResolver;
pub use php::PhpResolver;
pub use python::PythonResolver;
pub use ruby::RubyResolver;
pub use rust::RustResolver;
pub use scala::ScalaResolver;
pub use swift::SwiftResolver;

use super::{BuildToolId, LanguageId};
use crate::fs::{find_matches, FileSystem};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only view of the directory being resolved.
#[derive(Clone, Copy)]
pub struct ProjectDir<'a> {
    fs: &'a dyn FileSystem,
    root: &'a Path,
}

impl<'a> ProjectDir<'a> {
    pub fn new(fs: &'a dyn FileSystem, root: &'a Path) -> Self {
        Self { fs, root }
    }

    pub fn root(&self) -> &Path {
        self.root
    }

    pub fn exists(&self, name: &str) -> bool {
        self.fs.exists(&self.root.join(name))
    }

    pub fn any_exists(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.exists(name))
    }

    /// Reads `name` relative to the root; absent or unreadable files yield `None`.
    pub fn read(&self, name: &str) -> Option<String> {
        self.read_path(&self.root.join(name))
    }

    pub fn read_path(&self, path: &Path) -> Option<String> {
        if !self.fs.is_file(path) {
            return None;
        }
        match self.fs.read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable file");
                None
            }
        }
    }

    /// Reads the first of `names` that exists and has non-empty content.
    pub fn read_first(&self, names: &[&str]) -> Option<(String, String)> {
        names.iter().find_map(|name| {
            self.read(name)
                .filter(|content| !content.is_empty())
                .map(|content| (name.to_string(), content))
        })
    }

    pub fn glob(&self, pattern: &str) -> Vec<PathBuf> {
        find_matches(self.fs, self.root, pattern)
    }
}

/// Build tool and version extraction for one language family.
pub trait LanguageResolver: Send + Sync {
    /// Build tool for the project. Every family has a default, so this never fails.
    fn build_tool(&self, project: &ProjectDir<'_>) -> BuildToolId;

    /// Language/runtime version declared by the project, if any.
    fn version(&self, project: &ProjectDir<'_>, build_tool: &BuildToolId) -> Option<String>;
}

/// Resolver for a language. `Custom` languages have none.
pub fn resolver_for(language: &LanguageId) -> Option<&'static dyn LanguageResolver> {
    match language {
        LanguageId::Python => Some(&PythonResolver),
        LanguageId::Java => Some(&JavaResolver),
        LanguageId::Kotlin => Some(&KotlinResolver),
        LanguageId::Node | LanguageId::JavaScript | LanguageId::TypeScript => {
            Some(&JavaScriptResolver)
        }
        LanguageId::Go => Some(&GoResolver),
        LanguageId::Rust => Some(&RustResolver),
        LanguageId::Ruby => Some(&RubyResolver),
        LanguageId::Php => Some(&PhpResolver),
        LanguageId::DotNet | LanguageId::CSharp => Some(&DotNetResolver),
        LanguageId::Swift => Some(&SwiftResolver),
        LanguageId::Scala => Some(&ScalaResolver),
        LanguageId::Custom(_) => None,
    }
}
