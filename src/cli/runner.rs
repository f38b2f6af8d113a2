use crate::{
    cli::{Cli, Commands, PromptAction},
    config::{ProviderEnv, RunConfig},
    display,
    error::Result,
    ioutils::read_from,
    prompt::get_prompt_provider,
    session::{run_session, Outcome},
    templates,
};
use std::io::IsTerminal;
use std::path::Path;

/// Main entry point for CLI execution
pub fn run(cli: Cli) -> Result<()> {
    let Commands::Prompt(prompt_args) = cli.command;
    match prompt_args.action {
        Some(PromptAction::List) => list(&cli.project_root),
        Some(PromptAction::Run(args)) => {
            let config = args.to_config(cli.project_root);
            execute(&config, Some(&args.name))
        }
        None => {
            let config = RunConfig { project_root: cli.project_root, ..RunConfig::default() };
            execute(&config, None)
        }
    }
}

fn list(project_root: &Path) -> Result<()> {
    let templates = templates::list(project_root)?;
    display::template_list(&templates);
    display::usage_hints();
    Ok(())
}

fn execute(config: &RunConfig, template_name: Option<&str>) -> Result<()> {
    let env = ProviderEnv::from_env();
    let prompter = get_prompt_provider();
    let piped = read_piped_stdin()?;

    match run_session(config, &env, &prompter, piped, template_name)? {
        Outcome::Cancelled => log::info!("Session cancelled"),
        Outcome::Completed { saved_to: None, .. } => log::debug!("Output not saved"),
        Outcome::Completed { .. } => {}
    }
    Ok(())
}

/// Reads stdin when it is a pipe rather than a terminal.
fn read_piped_stdin() -> Result<Option<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let text = read_from(stdin.lock())?;
    log::debug!("Read {} bytes from stdin", text.len());
    Ok(Some(text))
}
