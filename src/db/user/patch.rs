use redis::Pipeline;

use crate::{
    db::to_json,
    errors::AppError,
    models::{redis::RedisKey, user::User},
    state::RedisClient,
};

fn update_user_pipe(user: &User, previous_email: &str) -> Result<Pipeline, AppError> {
    let json = to_json(user)?;

    let mut pipe = redis::pipe();
    pipe.atomic()
        .set(RedisKey::user(&user.user_alias), json)
        .del(RedisKey::user_email(previous_email));
    if user.is_active {
        pipe.set(RedisKey::user_email(&user.user_email), &user.user_alias);
    }
    Ok(pipe)
}

pub async fn update_user(
    user: &User,
    previous_email: &str,
    redis: &RedisClient,
) -> Result<(), AppError> {
    let mut conn = redis.get().await?;

    let _: () = update_user_pipe(user, previous_email)?
        .query_async(&mut *conn)
        .await?;

    Ok(())
}
