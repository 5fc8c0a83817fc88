use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const REWRITE_STORY_USAGE: &str = "RewriteStory";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiUsage {
    pub id: Uuid,
    pub user_name: String,
    pub usage: String,
    pub usage_time: DateTime<Utc>,
    pub total_tokens_consumed: Option<u32>,
    pub candidates_token_count: Option<u32>,
    pub prompt_token_count: Option<u32>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RewritePayload {
    pub story: String,
}

/// Body returned by the AI rewrite endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRewriteResponse {
    pub content: String,
    #[serde(default)]
    pub usage: Option<AiTokenUsage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiTokenUsage {
    pub total_tokens: Option<u32>,
    pub candidates_token_count: Option<u32>,
    pub prompt_token_count: Option<u32>,
}
