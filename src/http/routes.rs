use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        add_post_handler, add_user_handler, delete_post_handler, delete_user_handler,
        get_all_posts_handler, get_all_users_handler, get_post_handler, get_profile_handler,
        get_user_handler, rewrite_story_handler, update_post_handler, update_rating_handler,
        update_user_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/posts", get(get_all_posts_handler).post(add_post_handler))
        .route(
            "/posts/{post_id}",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route("/ratings/update", post(update_rating_handler))
        .route("/profile", get(get_profile_handler))
        .route(
            "/users",
            get(get_all_users_handler)
                .post(add_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/users/{user_alias}", get(get_user_handler))
        .route("/ai/rewrite", post(rewrite_story_handler))
        .with_state(state)
}
