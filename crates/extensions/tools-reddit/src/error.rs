//! Error types for the Reddit pipeline.

use concierge_protocols::error::PromptError;
use thiserror::Error;

/// Failure talking to Reddit.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Thread has no original post")]
    MissingPost,
}

/// Which step of the recommendation pipeline failed.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("search request failed: {0}")]
    SearchFailed(#[source] ClientError),

    #[error("search response malformed: {0}")]
    ParseFailed(#[source] ClientError),

    #[error("fetching thread {index} ({post_id}) failed: {source}")]
    DetailFetchFailed {
        index: usize,
        post_id: String,
        #[source]
        source: ClientError,
    },

    #[error("encoding collected threads failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("summarization failed: {0}")]
    SummarizeFailed(#[from] PromptError),
}

impl RecommendationError {
    /// Classify a search failure by whether the body could be read.
    pub fn from_search(err: ClientError) -> Self {
        match err {
            ClientError::Decode(_) => Self::ParseFailed(err),
            _ => Self::SearchFailed(err),
        }
    }

    /// Coarse progress counter reported to the model.
    ///
    /// 1: search issued, 3: thread loop entered. Summarization happens after
    /// the loop, so it reports 3 as well.
    pub fn step(&self) -> u8 {
        match self {
            Self::SearchFailed(_) | Self::ParseFailed(_) => 1,
            Self::DetailFetchFailed { .. } | Self::Encode(_) | Self::SummarizeFailed(_) => 3,
        }
    }
}
