use serde::Serialize;

use crate::models::{post::Post, post_rating::PostRating};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_name: String,
    pub user_posts: Vec<Post>,
    pub user_post_ratings: Vec<PostRating>,
}
