//! Schedule task tool.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info};

use concierge_protocols::error::ToolError;
use concierge_protocols::scheduler::Trigger;
use concierge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};
use concierge_protocols::types::RiskLevel;

/// Host callback invoked when a scheduled task fires.
pub const EXECUTE_TASK_CALLBACK: &str = "execute_task";

/// When the model wants a task to run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum When {
    Scheduled {
        date: DateTime<Utc>,
    },
    Delayed {
        #[serde(rename = "delayInSeconds")]
        delay_in_seconds: u64,
    },
    Cron {
        cron: String,
    },
    /// The model could not work out a schedule from the conversation.
    NoSchedule,
}

impl When {
    /// The scheduler trigger, or `None` for [`When::NoSchedule`].
    pub fn into_trigger(self) -> Option<Trigger> {
        match self {
            Self::Scheduled { date } => Some(Trigger::Scheduled { date }),
            Self::Delayed { delay_in_seconds } => Some(Trigger::Delayed { delay_in_seconds }),
            Self::Cron { cron } => Some(Trigger::Cron { cron }),
            Self::NoSchedule => None,
        }
    }
}

/// Parameters for the schedule_task tool.
#[derive(Debug, Deserialize)]
pub struct TaskDescriptor {
    pub when: When,
    pub description: String,
}

/// Standard cron day-of-week numbers, 0 and 7 both meaning Sunday.
const WEEKDAYS: [&str; 8] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Rewrite a standard day-of-week field with day names.
///
/// The `cron` crate counts days from 1 = Sunday, so numeric standard fields
/// are spelled out instead of shifted. Step values after `/` stay numeric.
fn standard_weekdays(field: &str) -> String {
    let name = |part: &str| match part.parse::<usize>() {
        Ok(n) if n < WEEKDAYS.len() => WEEKDAYS[n].to_string(),
        _ => part.to_string(),
    };

    field
        .split(',')
        .map(|item| {
            let (range, step) = match item.split_once('/') {
                Some((range, step)) => (range, Some(step)),
                None => (item, None),
            };
            let range = range.split('-').map(name).collect::<Vec<_>>().join("-");
            match step {
                Some(step) => format!("{}/{}", range, step),
                None => range,
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Check a cron expression before handing it to the scheduler.
///
/// Standard 5-field expressions get a seconds field and named weekdays for
/// the check only; the scheduler receives the expression unchanged.
fn validate_cron(expr: &str) -> Result<(), ToolError> {
    let fields: Vec<&str> = expr.split_whitespace().collect();
    let normalized = match fields.as_slice() {
        [minute, hour, day, month, weekday] => format!(
            "0 {} {} {} {} {}",
            minute,
            hour,
            day,
            month,
            standard_weekdays(weekday)
        ),
        _ => expr.trim().to_string(),
    };
    cron::Schedule::from_str(&normalized)
        .map(|_| ())
        .map_err(|e| ToolError::InvalidParameters(format!("Invalid cron expression '{}': {}", expr, e)))
}

/// Schedule task tool implementation.
pub struct ScheduleTaskTool {
    definition: ToolDefinition,
}

impl ScheduleTaskTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "when": {
                    "type": "object",
                    "description": "When the task should run",
                    "properties": {
                        "type": {
                            "type": "string",
                            "enum": ["scheduled", "delayed", "cron", "no-schedule"],
                            "description": "Which kind of schedule is given"
                        },
                        "date": {
                            "type": "string",
                            "format": "date-time",
                            "description": "Absolute time, for type 'scheduled'"
                        },
                        "delayInSeconds": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "Delay from now in seconds, for type 'delayed'"
                        },
                        "cron": {
                            "type": "string",
                            "description": "Cron expression, for type 'cron'. Example: '0 9 * * 1-5' (weekdays at 9am)"
                        }
                    },
                    "required": ["type"]
                },
                "description": {
                    "type": "string",
                    "description": "What should be done when the task runs"
                }
            },
            "required": ["when", "description"]
        });

        Self {
            definition: ToolDefinition::new(
                "schedule_task",
                "Schedule Task",
                "A tool to schedule a task to be executed at a later time",
            )
            .with_parameters_schema(schema)
            .with_risk_level(RiskLevel::Medium),
        }
    }
}

impl Default for ScheduleTaskTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ScheduleTaskTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: TaskDescriptor = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        let Some(trigger) = params.when.into_trigger() else {
            return Ok(ToolResult::success("Not a valid schedule input"));
        };
        if let Trigger::Cron { cron } = &trigger {
            validate_cron(cron)?;
        }

        let scheduler = ctx.scheduler()?;
        let (kind, payload) = (trigger.kind(), trigger.payload());

        match scheduler
            .schedule(trigger, EXECUTE_TASK_CALLBACK, &params.description)
            .await
        {
            Ok(task) => {
                info!(task_id = %task.id, kind, payload = %payload, "Scheduled task");
                let output = serde_json::to_value(&task)
                    .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
                Ok(ToolResult::success_json(
                    format!("Task scheduled for type \"{}\" : {}", kind, payload),
                    output,
                ))
            }
            Err(e) => {
                error!(error = %e, "error scheduling task");
                Ok(ToolResult::error(format!("Error scheduling task: {}", e)))
            }
        }
    }
}

#[cfg(test)]
#[path = "schedule_task_tests.rs"]
mod tests;
