use crate::backend::{Backend, LocalAssistant, RemoteCompletion};
use crate::config::{BackendChoice, ProviderEnv};
use crate::constants::remote;
use crate::error::{Error, Result};

/// Picks the backend for this run.
///
/// The local assistant wins under `auto` when it is installed; otherwise the
/// remote API is used if a credential is present. An explicit choice must be
/// usable or the run fails with `BackendUnavailable`.
pub fn resolve_backend(choice: BackendChoice, env: &ProviderEnv) -> Result<Box<dyn Backend>> {
    let local = LocalAssistant::new(env.assistant_program.clone());
    let local_available = local.is_available();
    let remote_available = env.api_key.is_some();
    log::debug!(
        "Backend availability: local={local_available} remote={remote_available} choice={choice}"
    );

    if !local_available && !remote_available {
        return Err(Error::NoProviderConfigured { env_var: remote::API_KEY_ENV.to_string() });
    }

    match choice {
        BackendChoice::Auto if local_available => Ok(Box::new(local)),
        BackendChoice::Claude if local_available => Ok(Box::new(local)),
        BackendChoice::Claude => Err(Error::BackendUnavailable(format!(
            "'{}' is not installed or not in PATH; use --backend openrouter",
            env.assistant_program
        ))),
        BackendChoice::Auto | BackendChoice::Openrouter => {
            Ok(Box::new(RemoteCompletion::new(env.api_key.clone(), env.model.clone())?))
        }
    }
}
