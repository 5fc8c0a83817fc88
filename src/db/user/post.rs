use redis::Pipeline;

use crate::{
    db::to_json,
    errors::AppError,
    models::{redis::RedisKey, user::User},
    state::RedisClient,
};

fn create_user_pipe(user: &User) -> Result<Pipeline, AppError> {
    let json = to_json(user)?;

    let mut pipe = redis::pipe();
    pipe.atomic()
        .set(RedisKey::user(&user.user_alias), json)
        .sadd(RedisKey::users(), &user.user_alias)
        .set(RedisKey::user_email(&user.user_email), &user.user_alias);
    Ok(pipe)
}

pub async fn create_user(user: &User, redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = redis.get().await?;

    let _: () = create_user_pipe(user)?.query_async(&mut *conn).await?;

    tracing::info!("Registered user {}", user.user_alias);
    Ok(())
}
