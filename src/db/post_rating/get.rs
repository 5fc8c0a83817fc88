use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db::from_json,
    errors::AppError,
    models::{PostRating, redis::RedisKey},
    state::RedisClient,
};

pub async fn get_post_rating(
    post_id: Uuid,
    user_name: &str,
    redis: &RedisClient,
) -> Result<Option<PostRating>, AppError> {
    let mut conn = redis.get().await?;

    let json: Option<String> = conn.get(RedisKey::post_rating(post_id, user_name)).await?;
    json.map(|j| from_json(&j)).transpose()
}

pub async fn get_ratings_by_user(
    user_name: &str,
    redis: &RedisClient,
) -> Result<Vec<PostRating>, AppError> {
    let mut conn = redis.get().await?;

    let post_ids: Vec<String> = conn.smembers(RedisKey::user_ratings(user_name)).await?;
    let keys: Vec<String> = post_ids
        .iter()
        .filter_map(|id| Uuid::parse_str(id).ok())
        .map(|post_id| RedisKey::post_rating(post_id, user_name))
        .collect();

    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let values: Vec<Option<String>> = conn.mget(&keys).await?;
    values
        .into_iter()
        .flatten()
        .map(|json| from_json::<PostRating>(&json))
        .collect()
}
