//! Weather lookup tool.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use concierge_protocols::error::ToolError;
use concierge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

#[derive(Debug, Deserialize)]
struct WeatherParams {
    city: String,
}

/// Placeholder weather lookup. Always sunny.
pub struct GetWeatherInformationTool {
    definition: ToolDefinition,
}

impl GetWeatherInformationTool {
    pub fn new() -> Self {
        Self {
            definition: ToolDefinition::new(
                "get_weather_information",
                "Get Weather Information",
                "Show the weather in a given city to the user",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "city": {"type": "string"}
                },
                "required": ["city"]
            }))
            .with_confirmation(),
        }
    }
}

impl Default for GetWeatherInformationTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for GetWeatherInformationTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: WeatherParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;

        info!(city = %params.city, "Getting weather information");
        Ok(ToolResult::success(format!("The weather in {} is sunny", params.city)))
    }
}
