use crate::{
    db::to_json,
    errors::AppError,
    models::{PostRating, redis::RedisKey},
    state::RedisClient,
};

pub async fn create_post_rating(rating: &PostRating, redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = redis.get().await?;

    let json = to_json(rating)?;

    // The user index rides along with the record; it is not a second logical write.
    let _: () = redis::pipe()
        .atomic()
        .set(RedisKey::post_rating(rating.post_id, &rating.user_name), json)
        .sadd(
            RedisKey::user_ratings(&rating.user_name),
            rating.post_id.to_string(),
        )
        .query_async(&mut *conn)
        .await?;

    Ok(())
}
