//! Inbox scanning for context candidates.

use crate::constants::INBOX_DIR;
use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A regular file found under the inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl DiscoveredFile {
    /// Menu label: relative path, size in KB and modification time.
    pub fn label(&self) -> String {
        format!(
            "{} ({} KB, modified: {})",
            self.relative_path.display(),
            self.size / 1024,
            self.modified.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Walks `<root>/00_Inbox` and returns every regular file below it.
///
/// There is no depth limit. Symbolic links are neither followed nor
/// reported. Entries are visited in file-name order within each directory.
pub fn discover<P: AsRef<Path>>(root: P) -> Result<Vec<DiscoveredFile>> {
    let root = root.as_ref();
    let inbox = root.join(INBOX_DIR);
    if !inbox.is_dir() {
        return Err(Error::NotFound(format!("inbox directory '{}'", inbox.display())));
    }

    let mut files = Vec::new();
    for dir_entry in WalkDir::new(&inbox).follow_links(false).sort_by_file_name() {
        let entry = dir_entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| inbox.clone());
            Error::io(path, e.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = entry.metadata().map_err(|e| Error::io(entry.path(), e.into()))?;
        let modified = metadata.modified().map_err(|e| Error::io(entry.path(), e))?;
        let relative_path =
            entry.path().strip_prefix(root).unwrap_or(entry.path()).to_path_buf();

        files.push(DiscoveredFile {
            path: entry.path().to_path_buf(),
            relative_path,
            name: entry.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
            modified: DateTime::<Local>::from(modified),
        });
    }

    log::debug!("Discovered {} file(s) in {}", files.len(), inbox.display());
    Ok(files)
}
