//! Language-model prompt capability supplied by the hosting agent.

use async_trait::async_trait;

use crate::error::PromptError;

/// Runs a single prompt against the host's model and returns its reply.
#[async_trait]
pub trait PromptRunner: Send + Sync {
    async fn run_prompt(&self, system: &str, task: &str) -> Result<String, PromptError>;
}
