// src/infra/errors.rs — Error types for tweak-agent

use thiserror::Error;

use crate::theme::ThemeError;

#[derive(Error, Debug)]
pub enum TweakAgentError {
    // Collaborator errors: logged, the iteration is skipped
    #[error("Generator '{command}' is not available")]
    GeneratorUnavailable { command: String },

    #[error("Generator '{command}' exited with {status}: {stderr}")]
    GeneratorFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    ApiStatus { status: u16, body: String },

    // Startup errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
