use redis::{AsyncCommands, Pipeline};
use uuid::Uuid;

use crate::{
    db::to_json,
    errors::AppError,
    models::{PostRating, redis::RedisKey},
    state::RedisClient,
};

pub async fn update_post_rating(rating: &PostRating, redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = redis.get().await?;

    let json = to_json(rating)?;
    let _: () = conn
        .set(RedisKey::post_rating(rating.post_id, &rating.user_name), json)
        .await?;

    Ok(())
}

fn commit_rating_pipe(
    post_id: Uuid,
    ratings: u32,
    rating: &PostRating,
) -> Result<Pipeline, AppError> {
    let rating_json = to_json(rating)?;

    let mut pipe = redis::pipe();
    pipe.atomic()
        .set(RedisKey::post_ratings(post_id), ratings)
        .set(
            RedisKey::post_rating(rating.post_id, &rating.user_name),
            rating_json,
        )
        .sadd(
            RedisKey::user_ratings(&rating.user_name),
            rating.post_id.to_string(),
        );
    Ok(pipe)
}

/// Writes the post counter and the rating record in one MULTI/EXEC block.
pub async fn commit_rating_change(
    post_id: Uuid,
    ratings: u32,
    rating: &PostRating,
    redis: &RedisClient,
) -> Result<(), AppError> {
    let mut conn = redis.get().await?;

    let _: () = commit_rating_pipe(post_id, ratings, rating)?
        .query_async(&mut *conn)
        .await?;

    tracing::debug!(
        "Committed rating change for post {} by {}",
        post_id,
        rating.user_name
    );

    Ok(())
}
