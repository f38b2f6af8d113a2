//! Markdown transcripts of a prompt run.

use crate::constants::save::{LOCATIONS, TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::ioutils::write_file;
use chrono::{DateTime, Local};
use std::path::Path;

/// Everything recorded in a saved transcript.
#[derive(Debug, Clone)]
pub struct Transcript<'a> {
    pub title: String,
    pub template_name: &'a str,
    pub model: &'a str,
    pub input: &'a str,
    pub response: &'a str,
    pub timestamp: DateTime<Local>,
}

impl Transcript<'_> {
    pub fn render(&self) -> String {
        format!(
            "# {title}\n\n**Date:** {date}\n**Prompt Template:** {template}\n**Model:** {model}\n\n## User Input\n\n{input}\n\n## Response\n\n{response}\n",
            title = self.title,
            date = self.timestamp.format(TIMESTAMP_FORMAT),
            template = self.template_name,
            model = self.model,
            input = self.input,
            response = self.response,
        )
    }

    /// Writes the transcript to `path`, creating parent directories.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("Writing transcript to {}", path.display());
        write_file(&self.render(), path)
    }
}

/// Where the save menu can put a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveLocation {
    Canned(&'static str),
    Custom,
}

impl SaveLocation {
    /// Every menu entry, canned destinations first.
    pub fn all() -> Vec<SaveLocation> {
        LOCATIONS
            .iter()
            .map(|(_, path)| SaveLocation::Canned(*path))
            .chain(std::iter::once(SaveLocation::Custom))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            SaveLocation::Canned(path) => LOCATIONS
                .iter()
                .find(|(_, p)| p == path)
                .map(|(label, _)| *label)
                .unwrap_or(*path),
            SaveLocation::Custom => crate::constants::save::CUSTOM_LABEL,
        }
    }
}

/// Title used for a transcript saved under `file_stem`.
pub fn title_from_file_stem(file_stem: &str) -> String {
    file_stem.replace('_', " ")
}
