//! Settings for the Reddit tools, read from the extension's config section.

use serde::Deserialize;

use crate::bundle::ReplyTrim;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RedditSettings {
    pub base_url: String,
    pub user_agent: String,
    /// Posts taken from the search response.
    pub search_limit: usize,
    /// Replies requested per thread.
    pub comment_limit: usize,
    pub reply_trim: ReplyTrim,
    /// Unset means requests never time out.
    pub request_timeout_secs: Option<u64>,
}

impl Default for RedditSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.reddit.com".to_string(),
            user_agent: "concierge/0.1 (restaurant recommendations)".to_string(),
            search_limit: 10,
            comment_limit: 30,
            reply_trim: ReplyTrim::DropLast,
            request_timeout_secs: None,
        }
    }
}

impl RedditSettings {
    /// Read settings from an extension config value. `null` yields the defaults.
    pub fn from_config(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(value)
    }
}
