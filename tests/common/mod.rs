#![allow(dead_code)]

use std::{
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use bulletin_be::{
    config::{AppConfig, RatingConsistency},
    db::{BulletinStore, MemoryStore},
    errors::AppError,
    models::{Post, PostRating, ai_usage::AiUsage, user::User},
};
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-secret";

pub fn test_config(consistency: RatingConsistency) -> AppConfig {
    let mode = match consistency {
        RatingConsistency::Unguarded => "unguarded",
        RatingConsistency::PostLock => "post_lock",
        RatingConsistency::Atomic => "atomic",
    };
    AppConfig::from_lookup(|key| match key {
        "STORE_BACKEND" => Some("memory".into()),
        "JWT_SECRET" => Some(JWT_SECRET.into()),
        "RATING_CONSISTENCY" => Some(mode.into()),
        _ => None,
    })
    .expect("test config")
}

pub async fn seed_post(store: &dyn BulletinStore, owner: &str, ratings: u32) -> Post {
    let mut post = Post::new("Hello".into(), "First post".into(), owner.into());
    post.ratings = ratings;
    store.add_post(&post).await.expect("seed post");
    post
}

pub async fn seed_rating(store: &dyn BulletinStore, post_id: Uuid, user: &str, previous: u8) {
    let mut rating = PostRating::first_rating(post_id, user);
    rating.previous_rating_value = previous;
    store.add_post_rating(&rating).await.expect("seed rating");
}

/// Wraps [`MemoryStore`] with switches for failure injection and call counting.
#[derive(Default)]
pub struct FaultyStore {
    pub inner: MemoryStore,
    pub fail_rating_writes: AtomicBool,
    pub fail_rating_reads: AtomicBool,
    pub commit_calls: AtomicUsize,
    pub counter_writes: AtomicUsize,
    /// When set, every post read sleeps this long before returning its snapshot,
    /// so concurrent callers all read before anyone writes.
    pub read_delay: Option<Duration>,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_read_delay(delay: Duration) -> Self {
        Self {
            read_delay: Some(delay),
            ..Self::default()
        }
    }

    fn rating_write(&self) -> Result<(), AppError> {
        if self.fail_rating_writes.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("rating write refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BulletinStore for FaultyStore {
    async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>, AppError> {
        let post = self.inner.get_post(post_id).await;
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        post
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, AppError> {
        self.inner.get_all_posts().await
    }

    async fn get_posts_by_owner(&self, user_name: &str) -> Result<Vec<Post>, AppError> {
        self.inner.get_posts_by_owner(user_name).await
    }

    async fn add_post(&self, post: &Post) -> Result<(), AppError> {
        self.inner.add_post(post).await
    }

    async fn update_post(&self, post: &Post) -> Result<(), AppError> {
        self.inner.update_post(post).await
    }

    async fn update_post_ratings(&self, post_id: Uuid, ratings: u32) -> Result<(), AppError> {
        self.counter_writes.fetch_add(1, Ordering::SeqCst);
        self.inner.update_post_ratings(post_id, ratings).await
    }

    async fn get_post_rating(
        &self,
        post_id: Uuid,
        user_name: &str,
    ) -> Result<Option<PostRating>, AppError> {
        if self.fail_rating_reads.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("rating read refused".into()));
        }
        self.inner.get_post_rating(post_id, user_name).await
    }

    async fn get_ratings_by_user(&self, user_name: &str) -> Result<Vec<PostRating>, AppError> {
        self.inner.get_ratings_by_user(user_name).await
    }

    async fn add_post_rating(&self, rating: &PostRating) -> Result<(), AppError> {
        self.rating_write()?;
        self.inner.add_post_rating(rating).await
    }

    async fn update_post_rating(&self, rating: &PostRating) -> Result<(), AppError> {
        self.rating_write()?;
        self.inner.update_post_rating(rating).await
    }

    async fn commit_rating_change(
        &self,
        post_id: Uuid,
        ratings: u32,
        rating: &PostRating,
    ) -> Result<(), AppError> {
        self.commit_calls.fetch_add(1, Ordering::SeqCst);
        self.rating_write()?;
        self.inner.commit_rating_change(post_id, ratings, rating).await
    }

    async fn get_user(&self, user_alias: &str) -> Result<Option<User>, AppError> {
        self.inner.get_user(user_alias).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.inner.get_user_by_email(email).await
    }

    async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        self.inner.get_all_users().await
    }

    async fn add_user(&self, user: &User) -> Result<(), AppError> {
        self.inner.add_user(user).await
    }

    async fn update_user(&self, user: &User, previous_email: &str) -> Result<(), AppError> {
        self.inner.update_user(user, previous_email).await
    }

    async fn add_ai_usage(&self, usage: &AiUsage) -> Result<(), AppError> {
        self.inner.add_ai_usage(usage).await
    }
}
