//! Restaurant recommendation tool.
//!
//! The pipeline runs strictly in sequence: one search, one request per
//! thread, then a single prompt over everything collected. Nothing is
//! retried. Any failure is reported back to the model as text naming the
//! step that failed.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info};

use concierge_protocols::error::ToolError;
use concierge_protocols::prompt::PromptRunner;
use concierge_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};
use concierge_protocols::types::RiskLevel;

use crate::bundle::{AggregatedBundle, ReplyTrim, ThreadText};
use crate::client::RedditClient;
use crate::error::{ClientError, RecommendationError};
use crate::settings::RedditSettings;

pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant that can analyze and extract text from strings";

pub const TASK_INSTRUCTION: &str = "Examine the text and determine which 5 restaurants are mentioned weighing both by most positive mentions and return a response as a list";

#[derive(Debug, Deserialize)]
struct RecommendationParams {
    city: String,
}

/// Tool that summarizes Reddit restaurant threads for a city.
pub struct GetRedditRecommendationsTool {
    definition: ToolDefinition,
    client: RedditClient,
    reply_trim: ReplyTrim,
}

impl GetRedditRecommendationsTool {
    pub fn new(settings: &RedditSettings) -> Result<Self, ClientError> {
        let definition = ToolDefinition::new(
            "get_reddit_recommendations",
            "Reddit Restaurant Recommendations",
            "Look for community recommendations for restaurants in a city by looking through reddit posts, returns a descriptive list of restaurants",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City to look for restaurants in"
                }
            },
            "required": ["city"]
        }))
        .with_risk_level(RiskLevel::Low);

        Ok(Self {
            definition,
            client: RedditClient::new(settings)?,
            reply_trim: settings.reply_trim,
        })
    }

    /// Search and fetch every matching thread.
    pub async fn collect(&self, city: &str) -> Result<AggregatedBundle, RecommendationError> {
        let posts = self
            .client
            .search_posts(city)
            .await
            .map_err(RecommendationError::from_search)?;
        debug!(city, posts = posts.len(), "Search returned posts");

        let mut bundle = AggregatedBundle::new();
        for (index, post) in posts.into_iter().enumerate() {
            let raw = self.client.fetch_thread(&post).await.map_err(|source| {
                RecommendationError::DetailFetchFailed {
                    index,
                    post_id: post.id.clone(),
                    source,
                }
            })?;
            let replies = self
                .reply_trim
                .apply(raw.replies)
                .into_iter()
                .flatten()
                .collect();
            bundle.insert(
                post.title,
                ThreadText {
                    post: raw.post,
                    replies,
                },
            );
        }
        Ok(bundle)
    }

    async fn recommend(
        &self,
        city: &str,
        runner: &dyn PromptRunner,
    ) -> Result<String, RecommendationError> {
        let bundle = self.collect(city).await?;
        let text = bundle.to_json().map_err(RecommendationError::Encode)?;

        let task = format!("{}\n\n{}", TASK_INSTRUCTION, text);
        Ok(runner.run_prompt(SYSTEM_INSTRUCTION, &task).await?)
    }
}

#[async_trait]
impl Tool for GetRedditRecommendationsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: RecommendationParams = serde_json::from_value(params)
            .map_err(|e| ToolError::InvalidParameters(e.to_string()))?;
        let runner = ctx.prompt_runner()?;

        match self.recommend(&params.city, runner).await {
            Ok(response) => {
                info!(city = %params.city, "Summarized Reddit recommendations");
                Ok(ToolResult::success(response))
            }
            Err(e) => {
                error!(city = %params.city, step = e.step(), error = %e, "error getting reddit recommendations");
                Ok(ToolResult::error(format!(
                    "error getting reddit recommendations: {} and {}",
                    e,
                    e.step()
                )))
            }
        }
    }
}

#[cfg(test)]
#[path = "get_reddit_recommendations_tests.rs"]
mod tests;
