use axum::{Json, extract::State, http::StatusCode};

use crate::{
    auth::AuthClaims,
    models::post_rating::{UpdateRatingDto, UpdateRatingPayload},
    state::AppState,
};

pub async fn update_rating_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<UpdateRatingPayload>,
) -> Result<Json<UpdateRatingDto>, (StatusCode, String)> {
    let result = state
        .ratings
        .update_rating(&payload.post_id, payload.is_increment, claims.user_name())
        .await
        .map_err(|e| {
            tracing::error!("Error updating rating: {}", e);
            e.to_response()
        })?;

    Ok(Json(result))
}
