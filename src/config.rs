//! Per-invocation configuration.
//!
//! `RunConfig` carries everything the command line decides for one run and
//! `ProviderEnv` carries what the environment says about available backends.
//! Both are built once in `main` and handed to the session controller, so
//! nothing downstream reads process-wide state.

use crate::constants::{assistant, remote};
use clap::ValueEnum;
use std::fmt::Display;
use std::path::PathBuf;

/// Which execution backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum BackendChoice {
    /// Local assistant when installed, remote API otherwise.
    #[default]
    Auto,
    /// Local Claude Code CLI only.
    Claude,
    /// Remote OpenRouter API only.
    Openrouter,
}

impl Display for BackendChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BackendChoice::Auto => "auto",
            BackendChoice::Claude => "claude",
            BackendChoice::Openrouter => "openrouter",
        };
        write!(f, "{s}")
    }
}

/// Options for one prompt run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub project_root: PathBuf,
    pub backend: BackendChoice,
    /// Files to include as context, in order.
    pub context_files: Vec<PathBuf>,
    /// Offer an inbox file as additional context.
    pub discover: bool,
    /// Ask whether to save the output after a successful run.
    pub save: bool,
    /// Write the transcript here without asking.
    pub output_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            backend: BackendChoice::Auto,
            context_files: Vec::new(),
            discover: false,
            save: true,
            output_path: None,
        }
    }
}

/// Backend-related settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEnv {
    /// Remote API credential; `None` when unset or blank.
    pub api_key: Option<String>,
    pub model: String,
    pub assistant_program: String,
}

impl ProviderEnv {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_blank(remote::API_KEY_ENV),
            model: non_blank(remote::MODEL_ENV)
                .unwrap_or_else(|| remote::DEFAULT_MODEL.to_string()),
            assistant_program: non_blank(assistant::PROGRAM_ENV)
                .unwrap_or_else(|| assistant::PROGRAM.to_string()),
        }
    }
}

impl Default for ProviderEnv {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
