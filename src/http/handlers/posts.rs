use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    auth::AuthClaims,
    models::{Post, post::PostPayload},
    state::AppState,
};

pub async fn get_post_handler(
    State(state): State<AppState>,
    AuthClaims(_claims): AuthClaims,
    Path(post_id): Path<String>,
) -> Result<Json<Post>, (StatusCode, String)> {
    let post = state.posts.get_post(&post_id).await.map_err(|e| {
        tracing::error!("Error retrieving post {}: {}", post_id, e);
        e.to_response()
    })?;

    Ok(Json(post))
}

pub async fn get_all_posts_handler(
    State(state): State<AppState>,
    AuthClaims(_claims): AuthClaims,
) -> Result<Json<Vec<Post>>, (StatusCode, String)> {
    let posts = state.posts.get_all_posts().await.map_err(|e| {
        tracing::error!("Error retrieving posts: {}", e);
        e.to_response()
    })?;

    Ok(Json(posts))
}

pub async fn add_post_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<PostPayload>,
) -> Result<Json<Post>, (StatusCode, String)> {
    match state.posts.add_new_post(payload, claims.user_name()).await {
        Ok(post) => Ok(Json(post)),
        Err(err) => {
            tracing::error!("Error adding post: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn update_post_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(post_id): Path<String>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<Post>, (StatusCode, String)> {
    let post = state
        .posts
        .update_post(&post_id, payload, claims.user_name())
        .await
        .map_err(|e| {
            tracing::error!("Error updating post {}: {}", post_id, e);
            e.to_response()
        })?;

    Ok(Json(post))
}

pub async fn delete_post_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(post_id): Path<String>,
) -> Result<Json<bool>, (StatusCode, String)> {
    let deleted = state
        .posts
        .delete_post(&post_id, claims.user_name())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting post {}: {}", post_id, e);
            e.to_response()
        })?;

    Ok(Json(deleted))
}
