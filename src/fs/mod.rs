//! FileSystem abstraction for testable file operations

mod mock;
mod pattern;
mod real;
mod r#trait;

pub use mock::MockFileSystem;
pub use pattern::{find_matches, has_wildcard, matches_any};
pub use r#trait::{DirEntry, FileSystem, FileType};
pub use real::RealFileSystem;
