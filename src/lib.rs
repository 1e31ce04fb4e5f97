//! stackradar - tech stack detection for CI/CD image selection
//!
//! Given a local repository, stackradar infers the dominant language, the
//! build tool and the pinned language version, then renders a container
//! image tag a CI pipeline can build with.
//!
//! # Core Concepts
//!
//! - **Registry**: static table of supported languages with their indicator
//!   files, image templates and default versions
//! - **Classification**: GitHub Linguist when installed, otherwise the first
//!   registry profile whose indicator files are present
//! - **Resolvers**: per-language readers of manifests and pin files that
//!   extract a build tool and a version
//!
//! # Example Usage
//!
//! ```
//! use stackradar::detection::Detector;
//! use stackradar::fs::MockFileSystem;
//! use std::path::Path;
//!
//! let fs = MockFileSystem::new();
//! fs.add_file("package.json", r#"{"engines":{"node":">=18.0.0"}}"#);
//!
//! let detector = Detector::with_filesystem(Box::new(fs));
//! let result = detector.detect(Path::new("/mock")).unwrap();
//!
//! assert_eq!(result.language, "node");
//! assert_eq!(result.build_tool, "npm");
//! assert_eq!(result.image_tag, "node:18-alpine");
//! ```
//!
//! # Project Structure
//!
//! - [`stack`]: identifiers, the language registry and version resolvers
//! - [`detection`]: classification and the detection orchestrator
//! - [`fs`]: filesystem abstraction with an in-memory double
//! - [`cli`]: command-line interface and output formats

pub mod cli;
pub mod config;
pub mod detection;
pub mod fs;
pub mod stack;
pub mod util;

pub use config::{ConfigError, StackradarConfig};
pub use detection::{
    ClassifierError, DetectionError, DetectionResult, Detector, ExternalClassifier, Linguist,
};
pub use stack::{BuildToolId, LanguageId, LanguageRegistry};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
