use crate::config::{BackendChoice, RunConfig};
use crate::constants::verbosity;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for now-sc.
#[derive(Parser, Debug)]
#[command(name = "now-sc", author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root containing 10_PromptTemplates and 00_Inbox.
    #[arg(short = 'C', long = "project-root", default_value = ".", global = true)]
    pub project_root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with prompt templates.
    ///
    /// Without a subcommand, pick a template from a menu and run it
    /// interactively.
    Prompt(PromptArgs),
}

#[derive(Args, Debug)]
pub struct PromptArgs {
    #[command(subcommand)]
    pub action: Option<PromptAction>,
}

#[derive(Subcommand, Debug)]
pub enum PromptAction {
    /// List all available prompt templates.
    List,
    /// Execute a specific prompt template by name.
    ///
    /// Input comes from a stdin pipe, context files, or an interactive prompt.
    ///
    /// > cat discovery.txt | now-sc prompt run sales-discovery
    ///
    /// > now-sc prompt run sales-discovery --file 00_Inbox/notes/meeting.txt
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Template name (exact or partial, case-insensitive).
    #[arg(value_name = "PROMPT_NAME")]
    pub name: String,

    /// Input file(s) to include as context.
    #[arg(short = 'f', long = "file", value_delimiter = ',')]
    pub files: Vec<PathBuf>,

    /// Execution backend.
    #[arg(long, value_enum, default_value_t = BackendChoice::Auto)]
    pub backend: BackendChoice,

    /// Pick an additional context file from the inbox.
    #[arg(long)]
    pub discover: bool,

    /// Do not offer to save the output.
    #[arg(long = "no-save")]
    pub no_save: bool,

    /// Write the transcript to this path without asking.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    pub fn to_config(&self, project_root: PathBuf) -> RunConfig {
        RunConfig {
            project_root,
            backend: self.backend,
            context_files: self.files.clone(),
            discover: self.discover,
            save: !self.no_save,
            output_path: self.output.clone(),
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
