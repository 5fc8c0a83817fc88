use axum::{Json, extract::State, http::StatusCode};

use crate::{auth::AuthClaims, models::ai_usage::RewritePayload, state::AppState};

pub async fn rewrite_story_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<RewritePayload>,
) -> Result<Json<String>, (StatusCode, String)> {
    let rewritten = state
        .rewrite
        .rewrite_story(&payload.story, claims.user_name())
        .await
        .map_err(|e| {
            tracing::error!("Error rewriting story: {}", e);
            e.to_response()
        })?;

    Ok(Json(rewritten))
}
