//! List scheduled tasks tool.

use async_trait::async_trait;
use tracing::{debug, error};

use concierge_protocols::error::ToolError;
use concierge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

/// List scheduled tasks tool implementation.
pub struct GetScheduledTasksTool {
    definition: ToolDefinition,
}

impl GetScheduledTasksTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                "get_scheduled_tasks",
                "List Scheduled Tasks",
                "List all tasks that have been scheduled",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {}
            })),
        }
    }
}

impl Default for GetScheduledTasksTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GetScheduledTasksTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let scheduler = ctx.scheduler()?;

        let tasks = match scheduler.list().await {
            Ok(tasks) => tasks,
            Err(e) => {
                error!(error = %e, "Error listing scheduled tasks");
                return Ok(ToolResult::error(format!("Error listing scheduled tasks: {}", e)));
            }
        };

        if tasks.is_empty() {
            return Ok(ToolResult::success("No scheduled tasks found."));
        }

        debug!(count = tasks.len(), "Listed scheduled tasks");
        let output = serde_json::to_value(&tasks)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        let content = serde_json::to_string_pretty(&output)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        Ok(ToolResult::success_json(content, output))
    }
}
