use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    db::store::BulletinStore,
    errors::AppError,
    models::{Post, PostRating, ai_usage::AiUsage, user::User},
};

#[derive(Default)]
struct UserTable {
    by_alias: HashMap<String, User>,
    /// Lowercased email to alias, active users only.
    by_email: HashMap<String, String>,
}

/// Process-local store for development runs and tests.
#[derive(Default)]
pub struct MemoryStore {
    posts: Mutex<HashMap<Uuid, Post>>,
    ratings: Mutex<HashMap<(Uuid, String), PostRating>>,
    users: Mutex<UserTable>,
    ai_usages: Mutex<Vec<AiUsage>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn ai_usages(&self) -> Vec<AiUsage> {
        self.ai_usages.lock().await.clone()
    }
}

#[async_trait]
impl BulletinStore for MemoryStore {
    async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>, AppError> {
        Ok(self.posts.lock().await.get(&post_id).cloned())
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.posts.lock().await.values().cloned().collect())
    }

    async fn get_posts_by_owner(&self, user_name: &str) -> Result<Vec<Post>, AppError> {
        Ok(self
            .posts
            .lock()
            .await
            .values()
            .filter(|p| p.post_owner_user_name == user_name)
            .cloned()
            .collect())
    }

    async fn add_post(&self, post: &Post) -> Result<(), AppError> {
        let mut posts = self.posts.lock().await;
        if posts.contains_key(&post.post_id) {
            return Err(AppError::DatabaseError(
                "A post with the generated ID already exists.".into(),
            ));
        }
        posts.insert(post.post_id, post.clone());
        Ok(())
    }

    async fn update_post(&self, post: &Post) -> Result<(), AppError> {
        let mut posts = self.posts.lock().await;
        let mut updated = post.clone();
        if let Some(stored) = posts.get(&post.post_id) {
            updated.ratings = stored.ratings;
        }
        posts.insert(post.post_id, updated);
        Ok(())
    }

    async fn update_post_ratings(&self, post_id: Uuid, ratings: u32) -> Result<(), AppError> {
        if let Some(post) = self.posts.lock().await.get_mut(&post_id) {
            post.ratings = ratings;
        }
        Ok(())
    }

    async fn get_post_rating(
        &self,
        post_id: Uuid,
        user_name: &str,
    ) -> Result<Option<PostRating>, AppError> {
        Ok(self
            .ratings
            .lock()
            .await
            .get(&(post_id, user_name.to_string()))
            .cloned())
    }

    async fn get_ratings_by_user(&self, user_name: &str) -> Result<Vec<PostRating>, AppError> {
        Ok(self
            .ratings
            .lock()
            .await
            .values()
            .filter(|r| r.user_name == user_name)
            .cloned()
            .collect())
    }

    async fn add_post_rating(&self, rating: &PostRating) -> Result<(), AppError> {
        self.ratings.lock().await.insert(
            (rating.post_id, rating.user_name.clone()),
            rating.clone(),
        );
        Ok(())
    }

    async fn update_post_rating(&self, rating: &PostRating) -> Result<(), AppError> {
        self.add_post_rating(rating).await
    }

    async fn commit_rating_change(
        &self,
        post_id: Uuid,
        ratings: u32,
        rating: &PostRating,
    ) -> Result<(), AppError> {
        // Both maps locked before either is touched.
        let mut posts = self.posts.lock().await;
        let mut records = self.ratings.lock().await;
        if let Some(post) = posts.get_mut(&post_id) {
            post.ratings = ratings;
        }
        records.insert((rating.post_id, rating.user_name.clone()), rating.clone());
        Ok(())
    }

    async fn get_user(&self, user_alias: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().await.by_alias.get(user_alias).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().await;
        Ok(users
            .by_email
            .get(&email.to_lowercase())
            .and_then(|alias| users.by_alias.get(alias))
            .cloned())
    }

    async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().await.by_alias.values().cloned().collect())
    }

    async fn add_user(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.lock().await;
        users
            .by_email
            .insert(user.user_email.to_lowercase(), user.user_alias.clone());
        users.by_alias.insert(user.user_alias.clone(), user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &User, previous_email: &str) -> Result<(), AppError> {
        let mut users = self.users.lock().await;
        users.by_email.remove(&previous_email.to_lowercase());
        if user.is_active {
            users
                .by_email
                .insert(user.user_email.to_lowercase(), user.user_alias.clone());
        }
        users.by_alias.insert(user.user_alias.clone(), user.clone());
        Ok(())
    }

    async fn add_ai_usage(&self, usage: &AiUsage) -> Result<(), AppError> {
        self.ai_usages.lock().await.push(usage.clone());
        Ok(())
    }
}
