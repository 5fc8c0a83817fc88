use async_trait::async_trait;
use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use uuid::Uuid;

use crate::{
    db::{ai_usage, post, post_rating, store::BulletinStore, user},
    errors::AppError,
    models::{Post, PostRating, ai_usage::AiUsage, user::User},
    state::RedisClient,
};

pub async fn create_redis_pool(redis_url: &str) -> Result<RedisClient, AppError> {
    let manager = RedisConnectionManager::new(redis_url)?;
    let pool = Pool::builder().build(manager).await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct RedisStore {
    redis: RedisClient,
}

impl RedisStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl BulletinStore for RedisStore {
    async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>, AppError> {
        post::get_post_by_id(post_id, &self.redis).await
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, AppError> {
        post::get_all_posts(&self.redis).await
    }

    async fn get_posts_by_owner(&self, user_name: &str) -> Result<Vec<Post>, AppError> {
        post::get_posts_by_owner(user_name, &self.redis).await
    }

    async fn add_post(&self, post: &Post) -> Result<(), AppError> {
        post::create_post(post, &self.redis).await
    }

    async fn update_post(&self, post: &Post) -> Result<(), AppError> {
        post::update_post(post, &self.redis).await
    }

    async fn update_post_ratings(&self, post_id: Uuid, ratings: u32) -> Result<(), AppError> {
        post::update_post_ratings(post_id, ratings, &self.redis).await
    }

    async fn get_post_rating(
        &self,
        post_id: Uuid,
        user_name: &str,
    ) -> Result<Option<PostRating>, AppError> {
        post_rating::get_post_rating(post_id, user_name, &self.redis).await
    }

    async fn get_ratings_by_user(&self, user_name: &str) -> Result<Vec<PostRating>, AppError> {
        post_rating::get_ratings_by_user(user_name, &self.redis).await
    }

    async fn add_post_rating(&self, rating: &PostRating) -> Result<(), AppError> {
        post_rating::create_post_rating(rating, &self.redis).await
    }

    async fn update_post_rating(&self, rating: &PostRating) -> Result<(), AppError> {
        post_rating::update_post_rating(rating, &self.redis).await
    }

    async fn commit_rating_change(
        &self,
        post_id: Uuid,
        ratings: u32,
        rating: &PostRating,
    ) -> Result<(), AppError> {
        post_rating::commit_rating_change(post_id, ratings, rating, &self.redis).await
    }

    async fn get_user(&self, user_alias: &str) -> Result<Option<User>, AppError> {
        user::get_user(user_alias, &self.redis).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        user::get_user_by_email(email, &self.redis).await
    }

    async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        user::get_all_users(&self.redis).await
    }

    async fn add_user(&self, user: &User) -> Result<(), AppError> {
        user::create_user(user, &self.redis).await
    }

    async fn update_user(&self, user: &User, previous_email: &str) -> Result<(), AppError> {
        user::update_user(user, previous_email, &self.redis).await
    }

    async fn add_ai_usage(&self, usage: &AiUsage) -> Result<(), AppError> {
        ai_usage::create_ai_usage(usage, &self.redis).await
    }
}
