use crate::{
    db::to_json,
    errors::AppError,
    models::{ai_usage::AiUsage, redis::RedisKey},
    state::RedisClient,
};

pub async fn create_ai_usage(usage: &AiUsage, redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = redis.get().await?;

    let json = to_json(usage)?;

    let _: () = redis::pipe()
        .set(RedisKey::ai_usage(usage.id), json)
        .rpush(RedisKey::user_ai_usages(&usage.user_name), usage.id.to_string())
        .query_async(&mut *conn)
        .await?;

    Ok(())
}
