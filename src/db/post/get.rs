use redis::aio::ConnectionLike;
use uuid::Uuid;

use crate::{
    db::from_json,
    errors::AppError,
    models::{Post, redis::RedisKey},
    state::RedisClient,
};

/// Decodes a post body and lays the separately stored counter over it.
fn decode_post(json: &str, ratings: Option<u32>) -> Result<Post, AppError> {
    let mut post: Post = from_json(json)?;
    if let Some(ratings) = ratings {
        post.ratings = ratings;
    }
    Ok(post)
}

pub async fn get_post_by_id(post_id: Uuid, redis: &RedisClient) -> Result<Option<Post>, AppError> {
    let mut conn = redis.get().await?;

    let (json, ratings): (Option<String>, Option<u32>) = redis::pipe()
        .get(RedisKey::post(post_id))
        .get(RedisKey::post_ratings(post_id))
        .query_async(&mut *conn)
        .await?;

    json.map(|j| decode_post(&j, ratings)).transpose()
}

pub async fn get_all_posts(redis: &RedisClient) -> Result<Vec<Post>, AppError> {
    let mut conn = redis.get().await?;

    let ids: Vec<String> = redis::cmd("SMEMBERS")
        .arg(RedisKey::posts())
        .query_async(&mut *conn)
        .await?;
    load_posts(&mut *conn, ids).await
}

pub async fn get_posts_by_owner(
    user_name: &str,
    redis: &RedisClient,
) -> Result<Vec<Post>, AppError> {
    let mut conn = redis.get().await?;

    let ids: Vec<String> = redis::cmd("SMEMBERS")
        .arg(RedisKey::user_posts(user_name))
        .query_async(&mut *conn)
        .await?;
    load_posts(&mut *conn, ids).await
}

async fn load_posts<C>(conn: &mut C, ids: Vec<String>) -> Result<Vec<Post>, AppError>
where
    C: ConnectionLike,
{
    let post_ids: Vec<Uuid> = ids
        .iter()
        .filter_map(|id| match Uuid::parse_str(id) {
            Ok(post_id) => Some(post_id),
            Err(e) => {
                tracing::warn!("Skipping malformed post id '{}' in index: {}", id, e);
                None
            }
        })
        .collect();

    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let body_keys: Vec<String> = post_ids.iter().map(|id| RedisKey::post(*id)).collect();
    let counter_keys: Vec<String> = post_ids
        .iter()
        .map(|id| RedisKey::post_ratings(*id))
        .collect();

    let (bodies, counters): (Vec<Option<String>>, Vec<Option<u32>>) = redis::pipe()
        .cmd("MGET")
        .arg(&body_keys)
        .cmd("MGET")
        .arg(&counter_keys)
        .query_async(conn)
        .await?;

    bodies
        .into_iter()
        .zip(counters)
        .filter_map(|(json, ratings)| json.map(|j| decode_post(&j, ratings)))
        .collect()
}
