use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    auth::AuthClaims,
    models::user::{User, UserPayload},
    state::AppState,
};

pub async fn get_all_users_handler(
    State(state): State<AppState>,
    AuthClaims(_claims): AuthClaims,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let users = state.users.get_all_users().await.map_err(|e| {
        tracing::error!("Error retrieving users: {}", e);
        e.to_response()
    })?;

    Ok(Json(users))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    AuthClaims(_claims): AuthClaims,
    Path(user_alias): Path<String>,
) -> Result<Json<User>, (StatusCode, String)> {
    let user = state
        .users
        .get_user_details(&user_alias)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving user {}: {}", user_alias, e);
            e.to_response()
        })?;

    Ok(Json(user))
}

pub async fn add_user_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, (StatusCode, String)> {
    match state.users.add_new_user(payload, claims.user_name()).await {
        Ok(user) => Ok(Json(user)),
        Err(err) => {
            tracing::error!("Error registering user: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, (StatusCode, String)> {
    let user = state
        .users
        .update_user(payload, claims.user_name())
        .await
        .map_err(|e| {
            tracing::error!("Error updating user: {}", e);
            e.to_response()
        })?;

    Ok(Json(user))
}

pub async fn delete_user_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<Json<bool>, (StatusCode, String)> {
    let deleted = state
        .users
        .delete_user(claims.user_name())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting user: {}", e);
            e.to_response()
        })?;

    Ok(Json(deleted))
}
