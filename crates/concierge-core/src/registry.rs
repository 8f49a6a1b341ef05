//! Tool registry for managing available tools.
//!
//! Tools come in two flavours: those the model may invoke directly, and
//! those flagged `requires_confirmation` which only run once the host has
//! obtained human approval and calls [`ToolRegistry::execute_confirmed`].

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, warn};

use concierge_protocols::error::{ExtensionError, ToolError};
use concierge_protocols::extension::ToolRegistryAccess;
use concierge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

/// Registry for managing tools by ID.
pub struct ToolRegistry {
    tools: DashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self {
            tools: DashMap::new(),
        }
    }

    /// Register a tool.
    ///
    /// Returns an error if a tool with the same ID is already registered.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        let id = tool.definition().id.clone();
        if self.tools.contains_key(&id) {
            return Err(ExtensionError::AlreadyRegistered(id));
        }
        self.tools.insert(id, tool);
        Ok(())
    }

    /// Unregister a tool.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.tools
            .remove(id)
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))?;
        Ok(())
    }

    /// Get a tool by ID.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(id).map(|tool| tool.clone())
    }

    /// Check if a tool with the given ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.tools.contains_key(id)
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all tool definitions, sorted by ID.
    pub fn list(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<ToolDefinition> = self
            .tools
            .iter()
            .map(|entry| entry.value().definition().clone())
            .collect();
        definitions.sort_by(|a, b| a.id.cmp(&b.id));
        definitions
    }

    /// Definitions of the tools that need human approval before running.
    pub fn confirmation_required(&self) -> Vec<ToolDefinition> {
        self.list()
            .into_iter()
            .filter(|def| def.requires_confirmation)
            .collect()
    }

    /// Execute a tool on the automatic path.
    ///
    /// Tools that require confirmation are refused with
    /// [`ToolError::ConfirmationRequired`].
    pub async fn execute(
        &self,
        id: &str,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let tool = self.lookup(id)?;
        if tool.requires_confirmation() {
            warn!(tool = id, "Refusing to auto-execute tool that requires confirmation");
            return Err(ToolError::ConfirmationRequired(id.to_string()));
        }
        Self::run(id, tool, params, ctx).await
    }

    /// Execute a tool after the host obtained human approval.
    pub async fn execute_confirmed(
        &self,
        id: &str,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let tool = self.lookup(id)?;
        Self::run(id, tool, params, ctx).await
    }

    fn lookup(&self, id: &str) -> Result<Arc<dyn Tool>, ToolError> {
        self.get(id).ok_or_else(|| ToolError::NotFound(id.to_string()))
    }

    async fn run(
        id: &str,
        tool: Arc<dyn Tool>,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        tool.validate(&params)?;

        debug!(
            tool = id,
            session_id = %ctx.session_id,
            correlation_id = %ctx.correlation_id,
            "Executing tool"
        );
        let result = tool.execute(params, ctx).await;

        match &result {
            Ok(r) if r.success => debug!(tool = id, "Tool completed"),
            Ok(r) => debug!(tool = id, error = ?r.error, "Tool reported an error"),
            Err(e) => warn!(tool = id, error = %e, "Tool execution faulted"),
        }
        result
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistryAccess for ToolRegistry {
    fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), ExtensionError> {
        self.register(tool)
    }

    fn unregister_tool(&self, tool_id: &str) -> Result<(), ExtensionError> {
        self.unregister(tool_id)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
