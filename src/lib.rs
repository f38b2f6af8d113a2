/// Handles argument parsing and command dispatch.
pub mod cli;

/// Per-run configuration and environment settings.
pub mod config;

/// Fixed paths, prompts and limits.
pub mod constants;

/// Context file formatting.
pub mod context;

/// Inbox scanning.
pub mod discovery;

/// Terminal output helpers.
pub mod display;

/// Defines custom error types.
pub mod error;

/// Local and remote execution backends.
pub mod backend;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// User input and interaction handling.
pub mod prompt;

/// The prompt session controller.
pub mod session;

/// Prompt template listing and lookup.
pub mod templates;
