//! Extension registration for Concierge.

use std::sync::Arc;

use tracing::warn;

use concierge_config::{Config, ConfigError};
use concierge_core::{ExtensionLoader, LoadReport, ToolRegistry};
use concierge_protocols::extension::Extension;
use concierge_tools_reddit::RedditToolsExtension;
use concierge_tools_schedule::ScheduleToolsExtension;
use concierge_tools_weather::WeatherToolsExtension;

/// Every extension shipped with the binary.
fn builtin_extensions() -> Vec<Box<dyn Extension>> {
    vec![
        Box::new(ScheduleToolsExtension::new()),
        Box::new(RedditToolsExtension::new()),
        Box::new(WeatherToolsExtension::new()),
    ]
}

/// Build a registry holding the tools of every enabled extension.
pub(crate) async fn build_registry(
    config: &Config,
) -> Result<(Arc<ToolRegistry>, LoadReport), ConfigError> {
    let registry = Arc::new(ToolRegistry::new());
    let loader = ExtensionLoader::new(registry.clone()).with_filter(
        config.extensions.enabled.clone(),
        config.extensions.disabled.clone(),
    );

    let mut extensions = Vec::new();
    for extension in builtin_extensions() {
        let settings = config.extension_settings(&extension.manifest().id)?;
        extensions.push((extension, settings));
    }

    let report = loader.load_all(extensions).await;
    for (id, reason) in &report.failed {
        warn!("Extension {} unavailable: {}", id, reason);
    }
    Ok((registry, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_config_registers_all_tools() {
        let (registry, report) = build_registry(&Config::default()).await.unwrap();

        assert!(report.is_clean());
        assert_eq!(report.loaded.len(), 3);
        let ids: Vec<String> = registry.list().into_iter().map(|d| d.id).collect();
        assert_eq!(
            ids,
            vec![
                "cancel_scheduled_task",
                "get_reddit_recommendations",
                "get_scheduled_tasks",
                "get_weather_information",
                "schedule_task",
            ]
        );
    }

    #[tokio::test]
    async fn test_disabled_extension_is_skipped() {
        let mut config = Config::default();
        config.extensions.disabled.push("tools-reddit".to_string());

        let (registry, report) = build_registry(&config).await.unwrap();
        assert_eq!(report.skipped, vec!["tools-reddit"]);
        assert!(!registry.contains("get_reddit_recommendations"));
        assert!(registry.contains("schedule_task"));
    }

    #[tokio::test]
    async fn test_shipped_config_is_valid() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
        let config = concierge_config::ConfigLoader::load(&path).unwrap();

        let result = concierge_config::ConfigValidator::validate(&config).unwrap();
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());

        let (_, report) = build_registry(&config).await.unwrap();
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn test_bad_reddit_settings_fail_only_that_extension() {
        let mut config = Config::default();
        config.reddit.base_url = "nowhere".to_string();

        let (registry, report) = build_registry(&config).await.unwrap();
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "tools-reddit");
        assert!(registry.contains("get_weather_information"));
    }
}
