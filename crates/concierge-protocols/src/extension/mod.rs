//! Extension protocol definitions.
//!
//! An extension is a named bundle of tools registered together.

mod context;
mod manifest;
mod traits;

pub use context::*;
pub use manifest::*;
pub use traits::*;
