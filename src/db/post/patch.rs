use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    db::to_json,
    errors::AppError,
    models::{Post, redis::RedisKey},
    state::RedisClient,
};

/// Rewrites the post body. The counter key is left alone.
pub async fn update_post(post: &Post, redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = redis.get().await?;

    let json = to_json(post)?;
    let _: () = conn.set(RedisKey::post(post.post_id), json).await?;

    Ok(())
}

pub async fn update_post_ratings(
    post_id: Uuid,
    ratings: u32,
    redis: &RedisClient,
) -> Result<(), AppError> {
    let mut conn = redis.get().await?;

    let _: () = conn.set(RedisKey::post_ratings(post_id), ratings).await?;

    Ok(())
}
