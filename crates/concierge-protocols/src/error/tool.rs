//! Tool execution errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),

    /// The host did not wire a capability the tool needs.
    #[error("Missing capability in tool context: {0}")]
    MissingCapability(&'static str),

    /// The tool may only run after a human approved the call.
    #[error("Tool requires confirmation before execution: {0}")]
    ConfirmationRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_not_found() {
        let err = ToolError::NotFound("test_tool".to_string());
        assert!(err.to_string().contains("Tool not found"));
        assert!(err.to_string().contains("test_tool"));
    }

    #[test]
    fn test_tool_error_execution_failed() {
        let err = ToolError::ExecutionFailed("Something went wrong".to_string());
        assert!(err.to_string().contains("execution failed"));
    }

    #[test]
    fn test_tool_error_invalid_parameters() {
        let err = ToolError::InvalidParameters("unknown variant `weekly`".to_string());
        assert!(err.to_string().contains("Invalid parameters"));
        assert!(err.to_string().contains("weekly"));
    }

    #[test]
    fn test_tool_error_validation_failed() {
        let err = ToolError::ValidationFailed("type mismatch".to_string());
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_tool_error_missing_capability() {
        let err = ToolError::MissingCapability("scheduler");
        assert!(err.to_string().contains("Missing capability"));
        assert!(err.to_string().contains("scheduler"));
    }

    #[test]
    fn test_tool_error_confirmation_required() {
        let err = ToolError::ConfirmationRequired("get_weather_information".to_string());
        assert!(err.to_string().contains("requires confirmation"));
        assert!(err.to_string().contains("get_weather_information"));
    }

    #[test]
    fn test_tool_error_debug() {
        let err = ToolError::NotFound("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NotFound"));
    }
}
