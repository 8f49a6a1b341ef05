//! Schedule tools extension definition.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use concierge_protocols::error::ExtensionError;
use concierge_protocols::extension::{Extension, ExtensionContext, ExtensionManifest};
use concierge_protocols::types::Version;

use crate::tools::{CancelScheduledTaskTool, GetScheduledTasksTool, ScheduleTaskTool};

/// Extension providing scheduling tools backed by the host scheduler.
pub struct ScheduleToolsExtension {
    manifest: ExtensionManifest,
}

impl ScheduleToolsExtension {
    pub fn new() -> Self {
        let manifest = ExtensionManifest::new("tools-schedule", "Schedule Tools", Version::new(0, 1, 0))
            .with_description("Schedule, list and cancel deferred tasks on the host scheduler")
            .with_tools(["schedule_task", "get_scheduled_tasks", "cancel_scheduled_task"]);

        Self { manifest }
    }
}

impl Default for ScheduleToolsExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for ScheduleToolsExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        ctx.tool_registry
            .register_tool(Arc::new(ScheduleTaskTool::new()))?;
        ctx.tool_registry
            .register_tool(Arc::new(GetScheduledTasksTool::new()))?;
        ctx.tool_registry
            .register_tool(Arc::new(CancelScheduledTaskTool::new()))?;

        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use concierge_protocols::extension::ToolRegistryAccess;
    use concierge_protocols::tool::Tool;

    #[derive(Default)]
    struct CollectingRegistry {
        ids: Mutex<Vec<String>>,
    }

    impl ToolRegistryAccess for CollectingRegistry {
        fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
            self.ids.lock().unwrap().push(tool.definition().id.clone());
            Ok(())
        }

        fn unregister_tool(&self, _tool_id: &str) -> Result<(), ExtensionError> {
            Ok(())
        }
    }

    #[test]
    fn test_extension_manifest() {
        let ext = ScheduleToolsExtension::new();
        assert_eq!(ext.manifest().id, "tools-schedule");
        assert_eq!(ext.manifest().name, "Schedule Tools");
        assert_eq!(ext.manifest().provides.tools.len(), 3);
    }

    #[tokio::test]
    async fn test_initialize_registers_manifest_tools() {
        let registry = Arc::new(CollectingRegistry::default());
        let mut ext = ScheduleToolsExtension::default();

        ext.initialize(ExtensionContext::new(serde_json::Value::Null, registry.clone()))
            .await
            .unwrap();

        let ids = registry.ids.lock().unwrap().clone();
        assert_eq!(ids, ext.manifest().provides.tools);
    }

    #[test]
    fn test_as_any() {
        let ext = ScheduleToolsExtension::new();
        assert!(ext.as_any().downcast_ref::<ScheduleToolsExtension>().is_some());
    }
}
