//! Reddit tools extension definition.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use concierge_protocols::error::ExtensionError;
use concierge_protocols::extension::{Extension, ExtensionContext, ExtensionManifest};
use concierge_protocols::types::Version;

use crate::settings::RedditSettings;
use crate::tools::GetRedditRecommendationsTool;

/// Reddit tools extension.
///
/// Reads [`RedditSettings`] from the extension config; a `null` config uses
/// the defaults.
pub struct RedditToolsExtension {
    manifest: ExtensionManifest,
}

impl RedditToolsExtension {
    pub fn new() -> Self {
        let manifest = ExtensionManifest::new("tools-reddit", "Reddit Tools", Version::new(0, 1, 0))
            .with_description("Restaurant recommendations summarized from Reddit threads")
            .with_tools(["get_reddit_recommendations"]);

        Self { manifest }
    }
}

impl Default for RedditToolsExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for RedditToolsExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        let settings = RedditSettings::from_config(&ctx.config)
            .map_err(|e| ExtensionError::InitializationFailed(format!("Invalid settings: {}", e)))?;
        let tool = GetRedditRecommendationsTool::new(&settings)
            .map_err(|e| ExtensionError::InitializationFailed(e.to_string()))?;

        ctx.tool_registry.register_tool(Arc::new(tool))?;

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
        let ext = RedditToolsExtension::new();
        assert_eq!(ext.manifest().id, "tools-reddit");
        assert_eq!(ext.manifest().provides.tools, vec!["get_reddit_recommendations"]);
    }

    #[tokio::test]
    async fn test_initialize_with_defaults() {
        let registry = Arc::new(CollectingRegistry::default());
        let mut ext = RedditToolsExtension::default();

        ext.initialize(ExtensionContext::new(serde_json::Value::Null, registry.clone()))
            .await
            .unwrap();

        assert_eq!(*registry.ids.lock().unwrap(), vec!["get_reddit_recommendations"]);
    }

    #[tokio::test]
    async fn test_initialize_rejects_bad_base_url() {
        let registry = Arc::new(CollectingRegistry::default());
        let mut ext = RedditToolsExtension::new();

        let result = ext
            .initialize(ExtensionContext::new(
                serde_json::json!({"base_url": "nowhere"}),
                registry.clone(),
            ))
            .await;

        assert!(matches!(result, Err(ExtensionError::InitializationFailed(_))));
        assert!(registry.ids.lock().unwrap().is_empty());
    }
}
