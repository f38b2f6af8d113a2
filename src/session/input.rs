use super::Session;
use crate::context::{combine_input, format_file_context};
use crate::discovery::discover;
use crate::display;
use crate::error::{Error, Result};
use crate::prompt::{self, TextPromptConfig, TextPrompter};
use std::path::PathBuf;

pub const INPUT_PROMPT: &str = "Enter your input for this prompt";
pub const DISCOVERY_PROMPT: &str = "Select file to include as context";

impl Session<'_> {
    /// Collects the text that follows the template body.
    ///
    /// Piped stdin is used as the free-text input when present. Context files
    /// (explicit and discovered) are formatted ahead of it. The user is only
    /// asked to type something when neither produced any text.
    pub(crate) fn gather_input(&self) -> Result<String> {
        let mut user_input = self.piped_input.clone().unwrap_or_default();
        if !user_input.is_empty() {
            display::success("Read input from stdin");
        }

        let mut files = self.config.context_files.clone();
        if self.config.discover {
            match self.select_inbox_file() {
                Ok(selected) => files.extend(selected),
                Err(e) => display::warning(&format!("Warning: {e}")),
            }
        }

        let context = if files.is_empty() {
            String::new()
        } else {
            let context = format_file_context(&files)?;
            display::success(&format!("Loaded {} context file(s)", files.len()));
            context
        };

        if user_input.is_empty() && context.is_empty() {
            user_input = self.prompter.prompt_text(&TextPromptConfig::new(INPUT_PROMPT))?;
        }

        Ok(combine_input(&context, &user_input))
    }

    /// Lets the user pick one inbox file. Cancelling selects nothing.
    fn select_inbox_file(&self) -> Result<Vec<PathBuf>> {
        let mut files = discover(&self.config.project_root)?;
        if files.is_empty() {
            return Err(Error::NotFound("files in inbox".to_string()));
        }

        display::heading(&format!("Discovered {} file(s) in inbox:", files.len()));
        let labels = files.iter().map(|f| f.label()).collect();
        match prompt::select_one(self.prompter, DISCOVERY_PROMPT, labels)? {
            Some(index) => Ok(vec![files.swap_remove(index).path]),
            None => Ok(Vec::new()),
        }
    }
}
