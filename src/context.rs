//! Formats context files into a single prompt section.

use crate::constants::CONTEXT_HEADER;
use crate::error::Result;
use crate::ioutils::read_file;
use std::path::Path;

/// Reads each file in order and joins them under a `Context Files:` header,
/// one `=== File: <name> ===` banner per file.
///
/// Fails on the first unreadable file.
pub fn format_file_context<P: AsRef<Path>>(paths: &[P]) -> Result<String> {
    let mut blob = String::from(CONTEXT_HEADER);

    for path in paths {
        let path = path.as_ref();
        let content = read_file(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        log::debug!("Adding {} ({} bytes) to context", path.display(), content.len());
        blob.push_str(&banner(&name));
        blob.push_str("\n\n");
        blob.push_str(&content);
        blob.push_str("\n\n");
    }

    Ok(blob)
}

/// Joins formatted context and free-text input.
pub fn combine_input(context: &str, user_input: &str) -> String {
    match (context.is_empty(), user_input.is_empty()) {
        (true, _) => user_input.to_string(),
        (false, true) => context.to_string(),
        (false, false) => {
            format!("{context}{}{user_input}", crate::constants::USER_INPUT_SEPARATOR)
        }
    }
}

fn banner(name: &str) -> String {
    format!("=== File: {name} ===")
}
