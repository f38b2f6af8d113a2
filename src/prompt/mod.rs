//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `scripted`: Canned answers for automation and tests

pub mod dialoguer;
pub mod interface;
pub mod scripted;

pub use interface::*;
pub use scripted::ScriptedPrompter;

use crate::error::Result;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl Prompter {
    self::dialoguer::DialoguerPrompter::new()
}

/// Shows a menu and returns the chosen index, or `None` if cancelled.
pub fn select_one<P: Prompter + ?Sized>(
    prompter: &P,
    prompt: &str,
    choices: Vec<String>,
) -> Result<Option<usize>> {
    prompter.select_one(&SingleChoiceConfig {
        prompt: prompt.to_string(),
        choices,
        default_index: None,
    })
}

pub fn confirm<P: Prompter + ?Sized>(prompter: &P, prompt: &str, default: bool) -> Result<bool> {
    prompter.confirm(&ConfirmationConfig { prompt: prompt.to_string(), default })
}
