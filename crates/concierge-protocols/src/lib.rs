//! # Concierge Protocols
//!
//! Protocol definitions (traits) shared by the Concierge tool extensions.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`Tool`] - Trait for tool implementations
//! - [`Extension`] - Trait for bundles of tools registered together
//! - [`Scheduler`] - Host capability for deferred tasks
//! - [`PromptRunner`] - Host capability for language-model prompts

pub mod error;
pub mod extension;
pub mod prompt;
pub mod scheduler;
pub mod tool;
pub mod types;

// Re-export core traits
pub use extension::{Extension, ExtensionContext, ExtensionManifest};
pub use prompt::PromptRunner;
pub use scheduler::{ScheduledTask, Scheduler, TaskHandle, Trigger};
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use error::{ExtensionError, PromptError, SchedulerError, ToolError};
pub use types::*;
