//! Prompt template discovery and lookup.
//!
//! Templates are plain Markdown files stored directly under
//! `10_PromptTemplates/` in the project root. Nothing is cached: every call
//! rescans the directory.

use crate::constants::{DESCRIPTION_MAX_LEN, ELLIPSIS, TEMPLATES_DIR, TEMPLATE_EXTENSION};
use crate::error::{Error, Result};
use crate::ioutils::{read_file, truncate_chars};
use std::path::{Path, PathBuf};

/// A prompt template found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Display name: file stem with underscores turned into spaces.
    pub name: String,
    pub file_name: String,
    pub path: PathBuf,
    /// First line of the file without the heading marker.
    pub description: Option<String>,
}

impl Template {
    fn from_path(path: PathBuf, file_name: String) -> Self {
        let stem = file_name.strip_suffix(TEMPLATE_EXTENSION).unwrap_or(&file_name);
        let name = stem.replace('_', " ");
        let description = match read_file(&path) {
            Ok(content) => describe(&content),
            Err(e) => {
                log::warn!("Cannot read description of {}: {e}", path.display());
                None
            }
        };

        Self { name, file_name, path, description }
    }

    /// File name without the `.md` extension.
    pub fn stem(&self) -> &str {
        self.file_name.strip_suffix(TEMPLATE_EXTENSION).unwrap_or(&self.file_name)
    }

    /// Reads the template body.
    pub fn body(&self) -> Result<String> {
        read_file(&self.path)
    }
}

/// Derives a one-line description from template content.
pub fn describe(content: &str) -> Option<String> {
    let first_line = content.lines().next()?;
    let text = first_line.strip_prefix('#').unwrap_or(first_line).trim();
    if text.is_empty() {
        return None;
    }
    Some(truncate_chars(text, DESCRIPTION_MAX_LEN, ELLIPSIS))
}

/// Path of the templates directory under `root`.
pub fn templates_dir<P: AsRef<Path>>(root: P) -> PathBuf {
    root.as_ref().join(TEMPLATES_DIR)
}

/// Lists every `.md` template under the project's templates directory,
/// ordered by file name.
pub fn list<P: AsRef<Path>>(root: P) -> Result<Vec<Template>> {
    let dir = templates_dir(root);
    if !dir.is_dir() {
        return Err(Error::NotFound(format!(
            "prompt templates directory '{}'",
            dir.display()
        )));
    }

    let entries = std::fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))?;

    let mut templates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(TEMPLATE_EXTENSION) {
            log::trace!("Skipping non-template file {file_name}");
            continue;
        }
        templates.push(Template::from_path(entry.path(), file_name));
    }

    if templates.is_empty() {
        return Err(Error::NotFound(format!("prompt templates in '{}'", dir.display())));
    }

    templates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    log::debug!("Found {} template(s) in {}", templates.len(), dir.display());
    Ok(templates)
}

/// Finds a template by name.
///
/// An exact, case-insensitive match on the display name or file stem wins;
/// otherwise the first template whose display name contains the query is
/// returned.
pub fn find<P: AsRef<Path>>(root: P, query: &str) -> Result<Template> {
    let templates = list(root)?;
    find_in(templates, query)
}

/// Applies the lookup rules of [`find`] to an already listed set.
pub fn find_in(mut templates: Vec<Template>, query: &str) -> Result<Template> {
    let needle = query.trim().to_lowercase();

    let exact = templates.iter().position(|t| {
        t.name.to_lowercase() == needle || t.stem().to_lowercase() == needle
    });
    let index = exact
        .or_else(|| templates.iter().position(|t| t.name.to_lowercase().contains(&needle)));

    match index {
        Some(i) => Ok(templates.swap_remove(i)),
        None => Err(Error::NotFound(format!("prompt '{query}'"))),
    }
}
