//! Glob-style indicator matching over a [`FileSystem`].

use super::FileSystem;
use glob::Pattern;
use std::path::{Path, PathBuf};

/// Returns true when `s` contains glob metacharacters.
pub fn has_wildcard(s: &str) -> bool {
    s.contains(['*', '?', '[', ']'])
}

/// Finds every path under `root` matching `pattern`.
///
/// Plain names are checked for existence directly. Patterns with wildcards
/// are split on `/` and matched one directory level per component, so
/// `*/*.csproj` only reaches project files exactly one level down.
pub fn find_matches(fs: &dyn FileSystem, root: &Path, pattern: &str) -> Vec<PathBuf> {
    if !has_wildcard(pattern) {
        let candidate = root.join(pattern);
        return if fs.exists(&candidate) {
            vec![candidate]
        } else {
            Vec::new()
        };
    }

    let components: Vec<&str> = pattern.split('/').filter(|c| !c.is_empty()).collect();
    let mut current = vec![root.to_path_buf()];

    for (idx, component) in components.iter().enumerate() {
        let last = idx + 1 == components.len();
        let mut next = Vec::new();

        for dir in &current {
            if !has_wildcard(component) {
                let candidate = dir.join(component);
                if fs.exists(&candidate) && (last || fs.is_dir(&candidate)) {
                    next.push(candidate);
                }
                continue;
            }

            let Ok(matcher) = Pattern::new(component) else {
                tracing::debug!(pattern, "Invalid glob component, treating as no match");
                return Vec::new();
            };

            let Ok(entries) = fs.read_dir(dir) else {
                continue;
            };

            next.extend(
                entries
                    .into_iter()
                    .filter(|entry| (last || entry.is_dir()) && matcher.matches(entry.file_name()))
                    .map(|entry| entry.path),
            );
        }

        if next.is_empty() {
            return next;
        }
        current = next;
    }

    current
}

/// True when at least one of `patterns` matches under `root`.
pub fn matches_any(fs: &dyn FileSystem, root: &Path, patterns: &[&str]) -> bool {
    patterns
        .iter()
        .any(|pattern| !find_matches(fs, root, pattern).is_empty())
}
