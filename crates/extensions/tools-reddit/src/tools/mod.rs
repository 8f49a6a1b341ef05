//! Reddit tools.

mod get_reddit_recommendations;

pub use get_reddit_recommendations::{
    GetRedditRecommendationsTool, SYSTEM_INSTRUCTION, TASK_INSTRUCTION,
};
