use super::{DirEntry, FileSystem, FileType};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

fn entry_kind(file_type: fs::FileType, path: &Path) -> FileType {
    // Symlinks are followed so a linked project directory still descends.
    if file_type.is_symlink() {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => FileType::Directory,
            Ok(meta) if meta.is_file() => FileType::File,
            _ => FileType::Symlink,
        }
    } else if file_type.is_dir() {
        FileType::Directory
    } else {
        FileType::File
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = fs::read_dir(path)
            .with_context(|| format!("Failed to list {}", path.display()))?
            .map(|entry| -> Result<DirEntry> {
                let entry = entry.with_context(|| format!("Failed to list {}", path.display()))?;
                let file_type = entry
                    .file_type()
                    .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
                let entry_path = entry.path();
                Ok(DirEntry {
                    file_type: entry_kind(file_type, &entry_path),
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path: entry_path,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).with_context(|| format!("Failed to resolve {}", path.display()))
    }
}
