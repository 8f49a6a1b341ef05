//! Tool execution context.
//!
//! Host capabilities are handed to tools explicitly through the context
//! rather than looked up from an ambient "current agent".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ToolError;
use crate::prompt::PromptRunner;
use crate::scheduler::Scheduler;

/// Context for tool execution.
#[derive(Clone)]
pub struct ToolContext {
    /// Session ID for the current conversation.
    pub session_id: String,

    /// Correlation ID for tracing.
    pub correlation_id: String,

    /// Scheduler owned by the hosting agent.
    pub scheduler: Option<Arc<dyn Scheduler>>,

    /// Prompt capability owned by the hosting agent.
    pub prompt_runner: Option<Arc<dyn PromptRunner>>,

    /// Additional context data.
    pub data: HashMap<String, serde_json::Value>,
}

impl ToolContext {
    /// Create a new tool context with no host capabilities attached.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            correlation_id: uuid::Uuid::new_v4().to_string(),
            scheduler: None,
            prompt_runner: None,
            data: HashMap::new(),
        }
    }

    /// Attach the host scheduler.
    pub fn with_scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Attach the host prompt runner.
    pub fn with_prompt_runner(mut self, runner: Arc<dyn PromptRunner>) -> Self {
        self.prompt_runner = Some(runner);
        self
    }

    /// The scheduler, or `MissingCapability` when the host did not provide one.
    pub fn scheduler(&self) -> Result<&dyn Scheduler, ToolError> {
        self.scheduler
            .as_deref()
            .ok_or(ToolError::MissingCapability("scheduler"))
    }

    /// The prompt runner, or `MissingCapability` when the host did not provide one.
    pub fn prompt_runner(&self) -> Result<&dyn PromptRunner, ToolError> {
        self.prompt_runner
            .as_deref()
            .ok_or(ToolError::MissingCapability("prompt_runner"))
    }

    /// Get a value from the context data.
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Set a value in the context data.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) {
        if let Ok(v) = serde_json::to_value(value) {
            self.data.insert(key.into(), v);
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
