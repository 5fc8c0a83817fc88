use crate::{
    db::from_json,
    errors::AppError,
    models::{redis::RedisKey, user::User},
    state::RedisClient,
};

pub async fn get_user(user_alias: &str, redis: &RedisClient) -> Result<Option<User>, AppError> {
    let mut conn = redis.get().await?;

    let json: Option<String> = redis::cmd("GET")
        .arg(RedisKey::user(user_alias))
        .query_async(&mut *conn)
        .await?;
    json.map(|j| from_json(&j)).transpose()
}

pub async fn get_user_by_email(
    email: &str,
    redis: &RedisClient,
) -> Result<Option<User>, AppError> {
    let alias: Option<String> = {
        let mut conn = redis.get().await?;
        redis::cmd("GET")
            .arg(RedisKey::user_email(email))
            .query_async(&mut *conn)
            .await?
    };

    let Some(alias) = alias else {
        return Ok(None);
    };

    // The index may trail a concurrent update; trust only a matching active record.
    Ok(get_user(&alias, redis)
        .await?
        .filter(|u| u.is_active && u.user_email.eq_ignore_ascii_case(email)))
}

pub async fn get_all_users(redis: &RedisClient) -> Result<Vec<User>, AppError> {
    let mut conn = redis.get().await?;

    let aliases: Vec<String> = redis::cmd("SMEMBERS")
        .arg(RedisKey::users())
        .query_async(&mut *conn)
        .await?;

    if aliases.is_empty() {
        return Ok(Vec::new());
    }

    let keys: Vec<String> = aliases.iter().map(|a| RedisKey::user(a)).collect();
    let values: Vec<Option<String>> = redis::cmd("MGET")
        .arg(&keys)
        .query_async(&mut *conn)
        .await?;

    values
        .into_iter()
        .flatten()
        .map(|json| from_json::<User>(&json))
        .collect()
}
