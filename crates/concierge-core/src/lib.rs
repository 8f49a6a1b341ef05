//! # Concierge Core
//!
//! The name-to-handler mapping the hosting agent consumes.
//!
//! ## Components
//!
//! - [`ToolRegistry`] - Registered tools, with separate automatic and
//!   confirmed execution paths
//! - [`ExtensionLoader`] - Initializes extensions against a registry

pub mod loader;
pub mod registry;

pub use loader::{ExtensionLoader, LoadReport};
pub use registry::ToolRegistry;
