use std::{sync::Arc, time::Duration};

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::{
    config::AiConfig,
    db::BulletinStore,
    errors::AppError,
    models::ai_usage::{AiRewriteResponse, AiUsage, REWRITE_STORY_USAGE},
    services::require_user_name,
};

const AI_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Forwards stories to the AI rewrite endpoint and books token usage.
pub struct AiRewriteService {
    client: reqwest::Client,
    config: Option<AiConfig>,
    store: Arc<dyn BulletinStore>,
}

impl AiRewriteService {
    pub fn new(config: Option<AiConfig>, store: Arc<dyn BulletinStore>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            store,
        }
    }

    pub async fn rewrite_story(&self, story: &str, user_name: &str) -> Result<String, AppError> {
        let user_name = require_user_name(user_name)?;
        let config = self.config.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable("AI rewrite is not configured".into())
        })?;

        let story = story.trim();
        if story.is_empty() {
            return Err(AppError::BadRequest("Story cannot be empty".into()));
        }

        let mut request = self
            .client
            .post(&config.url)
            .timeout(AI_REQUEST_TIMEOUT)
            .json(&json!({ "story": story }));
        if let Some(key) = &config.api_key {
            request = request.bearer_auth(key);
        }

        let res = request
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Failed to reach AI service: {e}")))?;

        if !res.status().is_success() {
            return Err(AppError::UpstreamError(format!(
                "AI service responded with {}",
                res.status()
            )));
        }

        let body: AiRewriteResponse = res
            .json()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Invalid AI response: {e}")))?;

        let rewritten = body.content.trim().to_string();
        if rewritten.is_empty() {
            tracing::error!("AI service returned an empty rewrite for {}", user_name);
            return Err(AppError::InternalError);
        }

        let tokens = body.usage.unwrap_or_default();
        let usage = AiUsage {
            id: Uuid::new_v4(),
            user_name: user_name.to_string(),
            usage: REWRITE_STORY_USAGE.to_string(),
            usage_time: Utc::now(),
            total_tokens_consumed: tokens.total_tokens,
            candidates_token_count: tokens.candidates_token_count,
            prompt_token_count: tokens.prompt_token_count,
            is_active: true,
        };
        self.store.add_ai_usage(&usage).await?;

        tracing::info!(
            "Rewrote story for {} (tokens: {:?})",
            user_name,
            usage.total_tokens_consumed
        );
        Ok(rewritten)
    }
}
