//! Extension loading.
//!
//! Each extension is initialized against the shared [`ToolRegistry`]. A
//! failing extension is logged and skipped so the remaining tools stay
//! available.

use std::sync::Arc;

use tracing::{info, warn};

use concierge_protocols::extension::{Extension, ExtensionContext, ToolRegistryAccess};

use crate::registry::ToolRegistry;

/// Outcome of loading a set of extensions.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// IDs of extensions that registered their tools.
    pub loaded: Vec<String>,
    /// IDs of extensions filtered out by configuration.
    pub skipped: Vec<String>,
    /// IDs of extensions whose initialization failed, with the reason.
    pub failed: Vec<(String, String)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Initializes extensions against a tool registry.
pub struct ExtensionLoader {
    registry: Arc<ToolRegistry>,
    enabled: Vec<String>,
    disabled: Vec<String>,
}

impl ExtensionLoader {
    /// Create a loader that loads every extension.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            enabled: Vec::new(),
            disabled: Vec::new(),
        }
    }

    /// Restrict loading. An empty `enabled` list means "all"; `disabled` always wins.
    pub fn with_filter(mut self, enabled: Vec<String>, disabled: Vec<String>) -> Self {
        self.enabled = enabled;
        self.disabled = disabled;
        self
    }

    /// Whether an extension ID passes the configured filter.
    pub fn is_enabled(&self, id: &str) -> bool {
        if self.disabled.iter().any(|d| d == id) {
            return false;
        }
        self.enabled.is_empty() || self.enabled.iter().any(|e| e == id)
    }

    /// Initialize one extension with its configuration section.
    pub async fn load(
        &self,
        mut extension: Box<dyn Extension>,
        config: serde_json::Value,
        report: &mut LoadReport,
    ) {
        let id = extension.manifest().id.clone();
        if !self.is_enabled(&id) {
            info!("Extension {} disabled by configuration", id);
            report.skipped.push(id);
            return;
        }

        let ctx = ExtensionContext::new(
            config,
            self.registry.clone() as Arc<dyn ToolRegistryAccess>,
        );
        match extension.initialize(ctx).await {
            Ok(()) => {
                let tools = extension.manifest().provides.tools.clone();
                info!("Registered {} tools: {:?}", id, tools);
                report.loaded.push(id);
            }
            Err(e) => {
                warn!("Failed to initialize {} extension: {}", id, e);
                report.failed.push((id, e.to_string()));
            }
        }
    }

    /// Initialize a list of extensions in order.
    pub async fn load_all(
        &self,
        extensions: Vec<(Box<dyn Extension>, serde_json::Value)>,
    ) -> LoadReport {
        let mut report = LoadReport::default();
        for (extension, config) in extensions {
            self.load(extension, config, &mut report).await;
        }
        report
    }
}
