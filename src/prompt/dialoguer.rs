//! Dialoguer-based implementations of prompt interfaces
//!
//! This module provides concrete implementations of the prompt interfaces
//! using the dialoguer library for terminal user interaction.

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, SingleChoiceConfig, SingleChoicePrompter,
    TextPromptConfig, TextPrompter,
};
use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .allow_empty(!config.required);

        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }
        if config.required {
            input = input.validate_with(|value: &String| -> std::result::Result<(), &'static str> {
                if value.trim().is_empty() {
                    Err("a value is required")
                } else {
                    Ok(())
                }
            });
        }

        Ok(input.interact_text()?)
    }
}

impl SingleChoicePrompter for DialoguerPrompter {
    fn select_one(&self, config: &SingleChoiceConfig) -> Result<Option<usize>> {
        let select = Select::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .default(config.default_index.unwrap_or(0));

        Ok(select.interact_opt()?)
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn confirm(&self, config: &ConfirmationConfig) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact_opt()?;

        // Escape counts as "no".
        Ok(answer.unwrap_or(false))
    }
}
