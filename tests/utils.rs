#![allow(dead_code)]

use now_sc::backend::Backend;
use now_sc::error::{Error, Result};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Builds a throwaway project tree with templates and inbox files.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_template(self, file_name: &str, content: &str) -> Self {
        self.write(&format!("10_PromptTemplates/{file_name}"), content)
    }

    pub fn with_inbox_file(self, relative: &str, content: &str) -> Self {
        self.write(&format!("00_Inbox/{relative}"), content)
    }

    pub fn write(self, relative: &str, content: &str) -> Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative)).unwrap()
    }
}

/// Backend that records what it was asked and answers from a script.
pub struct FakeBackend {
    response: std::result::Result<String, String>,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl FakeBackend {
    pub fn answering(response: &str) -> Self {
        Self { response: Ok(response.to_string()), calls: RefCell::new(Vec::new()) }
    }

    pub fn failing(message: &str) -> Self {
        Self { response: Err(message.to_string()), calls: RefCell::new(Vec::new()) }
    }

    pub fn last_input(&self) -> String {
        self.calls.borrow().last().map(|(_, input)| input.clone()).unwrap_or_default()
    }
}

impl Backend for FakeBackend {
    fn execute(&self, template_body: &str, user_input: &str) -> Result<String> {
        self.calls.borrow_mut().push((template_body.to_string(), user_input.to_string()));
        self.response.clone().map_err(Error::ExecutionFailed)
    }

    fn name(&self) -> &str {
        "Fake"
    }

    fn model(&self) -> &str {
        "fake/model-1"
    }
}

/// Drops the `**Date:**` line so transcripts can be compared exactly.
pub fn without_date(transcript: &str) -> String {
    transcript
        .lines()
        .filter(|l| !l.starts_with("**Date:** "))
        .collect::<Vec<_>>()
        .join("\n")
}
