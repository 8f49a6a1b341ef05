//! Tool protocol definitions.
//!
//! Tools are the callable units an agent's model can invoke.

mod context;
mod definition;
mod result;
mod traits;

pub use context::*;
pub use definition::*;
pub use result::*;
pub use traits::*;
