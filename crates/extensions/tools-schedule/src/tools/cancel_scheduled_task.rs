//! Cancel scheduled task tool.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info};

use concierge_protocols::error::ToolError;
use concierge_protocols::scheduler::TaskHandle;
use concierge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};
use concierge_protocols::types::RiskLevel;

/// Parameters for cancel_scheduled_task tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CancelParams {
    task_id: String,
}

/// Cancel scheduled task tool implementation.
pub struct CancelScheduledTaskTool {
    definition: ToolDefinition,
}

impl CancelScheduledTaskTool {
    pub fn new() -> Self {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "taskId": {
                    "type": "string",
                    "description": "The ID of the task to cancel"
                }
            },
            "required": ["taskId"]
        });

        Self {
            definition: ToolDefinition::new(
                "cancel_scheduled_task",
                "Cancel Scheduled Task",
                "Cancel a scheduled task using its ID",
            )
            .with_parameters_schema(schema)
            .with_risk_level(RiskLevel::Medium),
        }
    }
}

impl Default for CancelScheduledTaskTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for CancelScheduledTaskTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: CancelParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;
        let scheduler = ctx.scheduler()?;
        let handle = TaskHandle::new(params.task_id);

        match scheduler.cancel(&handle).await {
            Ok(()) => {
                info!(task_id = %handle, "Canceled scheduled task");
                Ok(ToolResult::success(format!(
                    "Task {} has been successfully canceled.",
                    handle
                )))
            }
            Err(e) => {
                error!(task_id = %handle, error = %e, "Error canceling scheduled task");
                Ok(ToolResult::error(format!("Error canceling task {}: {}", handle, e)))
            }
        }
    }
}
