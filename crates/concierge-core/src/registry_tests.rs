use super::*;
use async_trait::async_trait;

struct MockTool {
    definition: ToolDefinition,
}

impl MockTool {
    fn new(id: &str) -> Self {
        Self {
            definition: ToolDefinition::new(id, "Mock", "A mock tool")
                .with_parameters_schema(serde_json::json!({"type": "object"})),
        }
    }

    fn confirmed(id: &str) -> Self {
        Self {
            definition: ToolDefinition::new(id, "Mock", "A mock tool").with_confirmation(),
        }
    }
}

#[async_trait]
impl Tool for MockTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        Ok(ToolResult::success(format!("{} executed", self.definition.id)))
    }
}

fn ctx() -> ToolContext {
    ToolContext::new("test")
}

#[test]
fn test_registry_creation() {
    let registry = ToolRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.list().is_empty());
}

#[test]
fn test_register_tool() {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(MockTool::new("schedule_task"))).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.contains("schedule_task"));
}

#[test]
fn test_register_duplicate() {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(MockTool::new("schedule_task"))).unwrap();
    let result = registry.register(Arc::new(MockTool::new("schedule_task")));
    assert!(matches!(result, Err(ExtensionError::AlreadyRegistered(_))));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_unregister_tool() {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(MockTool::new("schedule_task"))).unwrap();
    registry.unregister("schedule_task").unwrap();
    assert!(registry.is_empty());
}

#[test]
fn test_unregister_nonexistent() {
    let registry = ToolRegistry::new();
    assert!(matches!(
        registry.unregister("nonexistent"),
        Err(ExtensionError::NotFound(_))
    ));
}

#[test]
fn test_list_is_sorted() {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(MockTool::new("schedule_task"))).unwrap();
    registry.register(Arc::new(MockTool::new("cancel_scheduled_task"))).unwrap();
    registry.register(Arc::new(MockTool::new("get_scheduled_tasks"))).unwrap();

    let ids: Vec<String> = registry.list().into_iter().map(|d| d.id).collect();
    assert_eq!(
        ids,
        vec!["cancel_scheduled_task", "get_scheduled_tasks", "schedule_task"]
    );
}

#[test]
fn test_confirmation_required_listing() {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(MockTool::new("schedule_task"))).unwrap();
    registry.register(Arc::new(MockTool::confirmed("get_weather_information"))).unwrap();

    let pending = registry.confirmation_required();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "get_weather_information");
}

#[tokio::test]
async fn test_execute_auto_tool() {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(MockTool::new("schedule_task"))).unwrap();

    let result = registry
        .execute("schedule_task", serde_json::json!({}), ctx())
        .await
        .unwrap();
    assert_eq!(result.content, "schedule_task executed");
}

#[tokio::test]
async fn test_execute_unknown_tool() {
    let registry = ToolRegistry::new();
    let result = registry.execute("missing", serde_json::json!({}), ctx()).await;
    assert!(matches!(result, Err(ToolError::NotFound(_))));
}

#[tokio::test]
async fn test_execute_refuses_confirmation_tool() {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(MockTool::confirmed("get_weather_information"))).unwrap();

    let result = registry
        .execute("get_weather_information", serde_json::json!({}), ctx())
        .await;
    match result {
        Err(ToolError::ConfirmationRequired(id)) => assert_eq!(id, "get_weather_information"),
        other => panic!("Expected ConfirmationRequired, got {:?}", other),
    }
}

#[tokio::test]
async fn test_execute_confirmed_runs_confirmation_tool() {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(MockTool::confirmed("get_weather_information"))).unwrap();

    let result = registry
        .execute_confirmed("get_weather_information", serde_json::json!({}), ctx())
        .await
        .unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn test_execute_validates_params() {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(MockTool::new("schedule_task"))).unwrap();

    let result = registry
        .execute("schedule_task", serde_json::json!("not an object"), ctx())
        .await;
    assert!(matches!(result, Err(ToolError::ValidationFailed(_))));
}

#[test]
fn test_tool_registry_access_trait() {
    let registry = ToolRegistry::new();
    registry.register_tool(Arc::new(MockTool::new("schedule_task"))).unwrap();
    registry.unregister_tool("schedule_task").unwrap();
    assert!(registry.is_empty());
}
