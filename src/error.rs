use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required directory, template or file set is missing or empty.
    #[error("Not found: {0}.")]
    NotFound(String),

    #[error("IO error on '{}': {source}.", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested backend cannot be used in this environment.
    #[error("Backend unavailable: {0}.")]
    BackendUnavailable(String),

    /// The backend ran but reported a failure.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("The {backend} backend returned an empty response.")]
    EmptyResponse { backend: String },

    #[error("No AI provider configured. Install the Claude Code CLI or set {env_var}.")]
    NoProviderConfigured { env_var: String },

    #[error("Terminal prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// An answer was rejected, e.g. an empty required field.
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

impl Error {
    /// Wraps an `std::io::Error` with the path it occurred on.
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Error::IoError { path: path.into(), source }
    }
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", console::style(&err).red());
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
