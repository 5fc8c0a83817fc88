use redis::Pipeline;

use crate::{
    db::to_json,
    errors::AppError,
    models::{Post, redis::RedisKey},
    state::RedisClient,
};

fn create_post_pipe(post: &Post) -> Result<Pipeline, AppError> {
    let json = to_json(post)?;
    let post_id = post.post_id.to_string();

    let mut pipe = redis::pipe();
    pipe.atomic()
        .set(RedisKey::post(post.post_id), json)
        .set(RedisKey::post_ratings(post.post_id), post.ratings)
        .sadd(RedisKey::posts(), &post_id)
        .sadd(RedisKey::user_posts(&post.post_owner_user_name), &post_id);
    Ok(pipe)
}

pub async fn create_post(post: &Post, redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = redis.get().await?;

    let _: () = create_post_pipe(post)?.query_async(&mut *conn).await?;

    tracing::info!(
        "Created post {} for {}",
        post.post_id,
        post.post_owner_user_name
    );

    Ok(())
}
