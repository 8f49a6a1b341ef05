//! Errors raised by a host prompt runner.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt runner unavailable: {0}")]
    Unavailable(String),

    #[error("Prompt failed: {0}")]
    Failed(String),

    #[error("Prompt returned an empty response")]
    EmptyResponse,
}
