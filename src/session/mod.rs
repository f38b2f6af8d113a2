//! The prompt session controller.
//!
//! One run walks through: resolve backend, pick template, gather input,
//! execute, show the response, and optionally save a transcript. Every step
//! either advances or ends the run; a declined or cancelled prompt ends it
//! cleanly.

use crate::backend::Backend;
use crate::config::{ProviderEnv, RunConfig};
use crate::constants::save::{CUSTOM_DEFAULT, DATE_FORMAT};
use crate::display;
use crate::error::{Error, Result};
use crate::prompt::{self, Prompter, TextPromptConfig, TextPrompter};
use crate::templates::{self, Template};
use chrono::Local;
use std::path::PathBuf;

pub mod input;
pub mod provider;
pub mod transcript;

pub use provider::resolve_backend;
pub use transcript::{SaveLocation, Transcript};

pub const TEMPLATE_PROMPT: &str = "Select a prompt template";
pub const SAVE_CONFIRM_PROMPT: &str = "Would you like to save this output";
pub const SAVE_LOCATION_PROMPT: &str = "Where would you like to save the output?";
pub const CUSTOM_PATH_PROMPT: &str = "Enter the path (relative to project root)";
pub const FILENAME_PROMPT: &str = "Enter filename (without extension)";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user backed out before anything ran.
    Cancelled,
    Completed {
        template: String,
        response: String,
        saved_to: Option<PathBuf>,
    },
}

/// Drives a single prompt run.
pub struct Session<'a> {
    config: &'a RunConfig,
    prompter: &'a dyn Prompter,
    piped_input: Option<String>,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a RunConfig, prompter: &'a dyn Prompter) -> Self {
        Self { config, prompter, piped_input: None }
    }

    /// Text read from a stdin pipe, used ahead of any interactive input.
    pub fn with_piped_input(mut self, input: Option<String>) -> Self {
        self.piped_input = input.filter(|s| !s.is_empty());
        self
    }

    /// Runs the session against an already resolved backend.
    ///
    /// With `template_name` the template is looked up by name; without it the
    /// user picks one from a menu.
    pub fn run(&self, template_name: Option<&str>, backend: &dyn Backend) -> Result<Outcome> {
        let Some(template) = self.resolve_template(template_name)? else {
            return Ok(Outcome::Cancelled);
        };
        let body = template.body()?;
        if template_name.is_none() {
            display::template_preview(&body);
        }
        display::heading(&format!("Using prompt: {}", template.name));

        let input = self.gather_input()?;

        display::heading(&format!("Executing prompt with {}...", backend.name()));
        let response = backend.execute(&body, &input)?;

        display::ruled("Response:", &response);
        display::success("Prompt executed successfully!");

        let saved_to = self.save(&template, backend.model(), &input, &response)?;
        if let Some(path) = &saved_to {
            display::success(&format!("Output saved to: {}", path.display()));
        }

        Ok(Outcome::Completed { template: template.name, response, saved_to })
    }

    fn resolve_template(&self, template_name: Option<&str>) -> Result<Option<Template>> {
        let root = &self.config.project_root;
        match template_name {
            Some(name) => match templates::find(root, name) {
                Ok(template) => Ok(Some(template)),
                Err(err @ Error::NotFound(_)) => {
                    if let Ok(available) = templates::list(root) {
                        display::warning("Available prompts:");
                        for template in &available {
                            println!("  - {}", template.name);
                        }
                    }
                    Err(err)
                }
                Err(err) => Err(err),
            },
            None => {
                let mut available = templates::list(root)?;
                let names = available.iter().map(|t| t.name.clone()).collect();
                Ok(prompt::select_one(self.prompter, TEMPLATE_PROMPT, names)?
                    .map(|index| available.swap_remove(index)))
            }
        }
    }

    /// Saves a transcript when asked to. Returns where it was written.
    fn save(
        &self,
        template: &Template,
        model: &str,
        input: &str,
        response: &str,
    ) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.config.output_path {
            let transcript = Transcript {
                title: template.name.clone(),
                template_name: &template.name,
                model,
                input,
                response,
                timestamp: Local::now(),
            };
            transcript.write_to(path)?;
            return Ok(Some(path.clone()));
        }

        if !self.config.save || !prompt::confirm(self.prompter, SAVE_CONFIRM_PROMPT, true)? {
            return Ok(None);
        }

        let locations = SaveLocation::all();
        let labels = locations.iter().map(|l| l.label().to_string()).collect();
        let Some(index) = prompt::select_one(self.prompter, SAVE_LOCATION_PROMPT, labels)? else {
            return Ok(None);
        };

        let destination = match &locations[index] {
            SaveLocation::Canned(path) => path.to_string(),
            SaveLocation::Custom => self.prompter.prompt_text(
                &TextPromptConfig::new(CUSTOM_PATH_PROMPT).with_default(CUSTOM_DEFAULT).required(),
            )?,
        };

        let default_name = format!("{}_{}", template.stem(), Local::now().format(DATE_FORMAT));
        let file_name = self.prompter.prompt_text(
            &TextPromptConfig::new(FILENAME_PROMPT).with_default(default_name).required(),
        )?;
        let file_name = file_name.trim();

        let path = self
            .config
            .project_root
            .join(destination.trim())
            .join(format!("{file_name}.md"));
        let transcript = Transcript {
            title: transcript::title_from_file_stem(file_name),
            template_name: &template.name,
            model,
            input,
            response,
            timestamp: Local::now(),
        };
        transcript.write_to(&path)?;
        Ok(Some(path))
    }
}

/// Resolves the backend and runs one session.
pub fn run_session(
    config: &RunConfig,
    env: &ProviderEnv,
    prompter: &dyn Prompter,
    piped_input: Option<String>,
    template_name: Option<&str>,
) -> Result<Outcome> {
    let backend = resolve_backend(config.backend, env)?;
    log::info!("Using backend {} ({})", backend.name(), backend.model());
    Session::new(config, prompter)
        .with_piped_input(piped_input)
        .run(template_name, backend.as_ref())
}
