//! # Concierge Reddit Tools Extension
//!
//! Gathers restaurant threads for a city from Reddit and asks the host's
//! model to pick the most recommended places.
//!
//! ## Tools
//!
//! - `get_reddit_recommendations`: Summarize community restaurant picks for a city

pub mod bundle;
pub mod client;
pub mod error;
pub mod extension;
pub mod settings;
pub mod tools;

pub use bundle::{AggregatedBundle, ReplyTrim, ThreadText, sanitize_title};
pub use client::{PostRef, RedditClient};
pub use error::{ClientError, RecommendationError};
pub use extension::RedditToolsExtension;
pub use settings::RedditSettings;
