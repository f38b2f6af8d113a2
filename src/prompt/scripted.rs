//! Prompt provider that answers from a script instead of a terminal.
//!
//! Answers are keyed by prompt label. Unknown prompts fall back to the
//! prompt's own default. Useful for automation and for testing the session
//! controller without a TTY.

use super::interface::*;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    text_responses: HashMap<String, String>,
    choice_responses: HashMap<String, Option<usize>>,
    confirmation_responses: HashMap<String, bool>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    pub fn with_choice_response(mut self, prompt: &str, choice_index: usize) -> Self {
        self.choice_responses.insert(prompt.to_string(), Some(choice_index));
        self
    }

    /// Script the user escaping out of a menu.
    pub fn with_cancelled_choice(mut self, prompt: &str) -> Self {
        self.choice_responses.insert(prompt.to_string(), None);
        self
    }

    pub fn with_confirmation_response(mut self, prompt: &str, response: bool) -> Self {
        self.confirmation_responses.insert(prompt.to_string(), response);
        self
    }

    /// Labels of every prompt shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn record(&self, prompt: &str) {
        self.asked.borrow_mut().push(prompt.to_string());
    }
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.record(&config.prompt);
        let response = self
            .text_responses
            .get(&config.prompt)
            .cloned()
            .or_else(|| config.default.clone())
            .unwrap_or_default();

        if config.required && response.trim().is_empty() {
            return Err(Error::ValidationError(format!(
                "'{}' requires a value",
                config.prompt
            )));
        }
        log::info!("Auto-answering text prompt '{}' with: '{}'", config.prompt, response);
        Ok(response)
    }
}

impl SingleChoicePrompter for ScriptedPrompter {
    fn select_one(&self, config: &SingleChoiceConfig) -> Result<Option<usize>> {
        self.record(&config.prompt);
        let response = match self.choice_responses.get(&config.prompt) {
            Some(scripted) => *scripted,
            None => Some(config.default_index.unwrap_or(0)),
        };

        if let Some(index) = response {
            if index >= config.choices.len() {
                return Err(Error::ValidationError(format!(
                    "choice {index} out of range for '{}'",
                    config.prompt
                )));
            }
        }
        log::info!("Auto-answering choice prompt '{}' with: {:?}", config.prompt, response);
        Ok(response)
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn confirm(&self, config: &ConfirmationConfig) -> Result<bool> {
        self.record(&config.prompt);
        let response = self
            .confirmation_responses
            .get(&config.prompt)
            .copied()
            .unwrap_or(config.default);

        log::info!("Auto-answering confirmation '{}' with: {}", config.prompt, response);
        Ok(response)
    }
}
