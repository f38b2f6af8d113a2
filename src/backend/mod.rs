//! Execution backends.
//!
//! A backend takes a template body and the user's input and returns the
//! assistant's answer. Which backend runs is decided by the session
//! controller; the implementations here only know how to talk to their own
//! endpoint.

use crate::constants::USER_REQUEST_SEPARATOR;
use crate::error::Result;

pub mod local;
pub mod remote;

pub use local::LocalAssistant;
pub use remote::RemoteCompletion;

/// Uniform execution contract shared by every backend.
pub trait Backend {
    /// Runs the prompt and returns the full response text.
    fn execute(&self, template_body: &str, user_input: &str) -> Result<String>;

    /// Short human-readable backend name, used in status lines.
    fn name(&self) -> &str;

    /// Model identifier recorded in saved transcripts.
    fn model(&self) -> &str;
}

/// Joins a template body and user input into the text sent to a backend.
pub fn build_prompt(template_body: &str, user_input: &str) -> String {
    format!("{template_body}{USER_REQUEST_SEPARATOR}{user_input}")
}
