use std::path::Path;

use crate::error::{Error, Result};

/// Reads a whole file as UTF-8, reporting the path on failure.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|e| Error::io(dest_path, e))
}

/// Writes `content` to `dest_path`, creating missing parent directories.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(|e| Error::io(dest_path, e))
}

/// Reads everything from `reader`. Invalid UTF-8 is replaced rather than
/// rejected.
pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|e| Error::io("<stdin>", e))?;
    match String::from_utf8(buf) {
        Ok(text) => Ok(text),
        Err(e) => {
            log::warn!("Input is not valid UTF-8; performing lossy conversion");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Truncates `text` to at most `max_chars` characters, appending `marker`
/// when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize, marker: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{marker}", &text[..byte_idx]),
        None => text.to_string(),
    }
}
