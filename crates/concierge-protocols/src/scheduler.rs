//! Scheduler capability supplied by the hosting agent.
//!
//! The tools never store tasks themselves; they describe a trigger and hand
//! it to whatever engine the host wires into the [`ToolContext`].
//!
//! [`ToolContext`]: crate::tool::ToolContext

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// When a scheduled task should run. Exactly one kind of trigger is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Trigger {
    /// Run once at an absolute point in time.
    Scheduled { date: DateTime<Utc> },
    /// Run once after a delay from now.
    Delayed {
        #[serde(rename = "delayInSeconds")]
        delay_in_seconds: u64,
    },
    /// Run on a recurrence expression.
    Cron { cron: String },
}

impl Trigger {
    /// Discriminant name as exposed to the model.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scheduled { .. } => "scheduled",
            Self::Delayed { .. } => "delayed",
            Self::Cron { .. } => "cron",
        }
    }

    /// The payload selected by the discriminant, rendered as text.
    pub fn payload(&self) -> String {
        match self {
            Self::Scheduled { date } => date.to_rfc3339(),
            Self::Delayed { delay_in_seconds } => delay_in_seconds.to_string(),
            Self::Cron { cron } => cron.clone(),
        }
    }
}

/// Opaque identifier handed out by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskHandle(String);

impl TaskHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TaskHandle {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A task as reported back by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskHandle,
    /// Host callback invoked when the task fires.
    pub callback: String,
    pub description: String,
    pub trigger: Trigger,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run: Option<DateTime<Utc>>,
}

/// Deferred-task engine owned by the host.
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Create a task that invokes `callback` with `description` when `trigger` fires.
    async fn schedule(
        &self,
        trigger: Trigger,
        callback: &str,
        description: &str,
    ) -> Result<ScheduledTask, SchedulerError>;

    /// All currently scheduled tasks.
    async fn list(&self) -> Result<Vec<ScheduledTask>, SchedulerError>;

    /// Cancel a previously created task.
    async fn cancel(&self, handle: &TaskHandle) -> Result<(), SchedulerError>;
}
