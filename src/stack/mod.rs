//! Language table and per-language resolution.
//!
//! Identifiers are closed enums with a `Custom(String)` arm so that names
//! reported by an external classifier survive even when no profile exists
//! for them. The [`LanguageRegistry`] holds the static image/indicator table,
//! and [`language::resolver_for`] maps a language to its build tool and
//! version resolver.
//!
//! # Example
//!
//! ```
//! use stackradar::stack::{LanguageId, LanguageRegistry};
//!
//! let registry = LanguageRegistry::with_defaults();
//! assert_eq!(registry.render_tag(&LanguageId::Go, "1.22"), "golang:1.22-alpine");
//! ```

#[macro_use]
pub mod id_enum_macro;

pub mod build_tool_id;
pub mod language;
pub mod language_id;
pub mod registry;

pub use build_tool_id::BuildToolId;
pub use language::{resolver_for, LanguageResolver, ProjectDir};
pub use language_id::LanguageId;
pub use registry::{LanguageProfile, LanguageRegistry, FALLBACK_VERSION, VERSION_PLACEHOLDER};
