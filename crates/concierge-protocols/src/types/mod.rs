//! Common types used across the Concierge crates.

mod common;

pub use common::*;
