//! Weather tools extension definition.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use concierge_protocols::error::ExtensionError;
use concierge_protocols::extension::{Extension, ExtensionContext, ExtensionManifest};
use concierge_protocols::types::Version;

use crate::weather::GetWeatherInformationTool;

pub struct WeatherToolsExtension {
    manifest: ExtensionManifest,
}

impl WeatherToolsExtension {
    pub fn new() -> Self {
        let manifest = ExtensionManifest::new("tools-weather", "Weather Tools", Version::new(0, 1, 0))
            .with_description("Weather lookup, run only after human approval")
            .with_tools(["get_weather_information"]);

        Self { manifest }
    }
}

impl Default for WeatherToolsExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for WeatherToolsExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        ctx.tool_registry
            .register_tool(Arc::new(GetWeatherInformationTool::new()))?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
