//! Minimal Reddit JSON API client.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::bundle::sanitize_title;
use crate::error::ClientError;
use crate::settings::RedditSettings;

/// Phrase combined with the city name in the search query.
const SEARCH_PHRASE: &str = "\"best restaurant\"";

#[derive(Debug, Deserialize)]
struct Listing<T> {
    data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
struct ListingData<T> {
    children: Vec<Thing<T>>,
}

#[derive(Debug, Deserialize)]
struct Thing<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct PostSummary {
    title: String,
    subreddit: String,
    id: String,
}

#[derive(Debug, Deserialize)]
struct PostBody {
    #[serde(default)]
    selftext: String,
}

#[derive(Debug, Deserialize)]
struct Comment {
    /// Absent on "more" stubs.
    #[serde(default)]
    body: Option<String>,
}

/// A search hit, title already sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRef {
    pub title: String,
    pub subreddit: String,
    pub id: String,
}

/// A fetched thread before reply trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawThread {
    pub post: String,
    /// One entry per listed reply, `None` where the entry has no body.
    pub replies: Vec<Option<String>>,
}

/// Client for Reddit's public JSON endpoints.
pub struct RedditClient {
    http: Client,
    base_url: Url,
    search_limit: usize,
    comment_limit: usize,
}

impl RedditClient {
    pub fn new(settings: &RedditSettings) -> Result<Self, ClientError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", settings.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(settings.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers);
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            search_limit: settings.search_limit,
            comment_limit: settings.comment_limit,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let body = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Search posts recommending restaurants in `city`.
    pub async fn search_posts(&self, city: &str) -> Result<Vec<PostRef>, ClientError> {
        let url = self.endpoint(&["search.json"])?;
        let query = [
            ("q", format!("{} {}", SEARCH_PHRASE, city)),
            ("limit", self.search_limit.to_string()),
            ("type", "posts".to_string()),
            ("sort", "relevance".to_string()),
            ("t", "all".to_string()),
        ];
        debug!(city, "Searching Reddit");

        let listing: Listing<PostSummary> = self.get_json(url, &query).await?;
        Ok(listing
            .data
            .children
            .into_iter()
            .take(self.search_limit)
            .map(|thing| PostRef {
                title: sanitize_title(&thing.data.title),
                subreddit: thing.data.subreddit,
                id: thing.data.id,
            })
            .collect())
    }

    /// Fetch a thread's original post and its top replies.
    pub async fn fetch_thread(&self, post: &PostRef) -> Result<RawThread, ClientError> {
        let slug = format!("{}.json", post.title);
        let url = self.endpoint(&["r", &post.subreddit, "comments", &post.id, &slug])?;
        let query = [
            ("sort", "top".to_string()),
            ("limit", self.comment_limit.to_string()),
        ];
        debug!(post_id = %post.id, subreddit = %post.subreddit, "Fetching Reddit thread");

        let (op, comments): (Listing<PostBody>, Listing<Comment>) =
            self.get_json(url, &query).await?;
        let post = op
            .data
            .children
            .into_iter()
            .next()
            .ok_or(ClientError::MissingPost)?
            .data
            .selftext;
        let replies = comments
            .data
            .children
            .into_iter()
            .map(|thing| thing.data.body)
            .collect();

        Ok(RawThread { post, replies })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
