//! Error types for the Concierge protocol layer.

mod extension;
mod prompt;
mod scheduler;
mod tool;

pub use extension::*;
pub use prompt::*;
pub use scheduler::*;
pub use tool::*;
