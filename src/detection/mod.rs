//! Language, build tool and version detection for a single directory.
//!
//! # Example
//!
//! ```
//! use stackradar::detection::Detector;
//! use stackradar::fs::MockFileSystem;
//! use std::path::Path;
//!
//! let fs = MockFileSystem::new();
//! fs.add_file("go.mod", "module example.com/app\n\ngo 1.22\n");
//!
//! let detector = Detector::with_filesystem(Box::new(fs));
//! let result = detector.detect(Path::new("/mock")).unwrap();
//! assert_eq!(result.image_tag, "golang:1.22-alpine");
//! ```

pub mod classifier;
pub mod detector;
pub mod error;

pub use classifier::{ExternalClassifier, Linguist, StaticClassifier};
pub use detector::{DetectionResult, Detector};
pub use error::{ClassifierError, DetectionError};
