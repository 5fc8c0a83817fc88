use axum::{Json, extract::State, http::StatusCode};

use crate::{auth::AuthClaims, models::profile::UserProfile, state::AppState};

pub async fn get_profile_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    let profile = state
        .profiles
        .get_user_profile(claims.user_name())
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving profile: {}", e);
            e.to_response()
        })?;

    Ok(Json(profile))
}
