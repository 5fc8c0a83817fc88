use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{Post, PostRating, ai_usage::AiUsage, user::User},
};

/// Persistence the services depend on.
///
/// Reads return raw snapshots, soft-deleted records included; filtering on
/// `is_active` belongs to the callers. A post's rating counter is stored apart
/// from its other fields: `update_post` never writes it and the rating writes
/// never touch anything else. No write spans more than one record except
/// [`BulletinStore::commit_rating_change`].
#[async_trait]
pub trait BulletinStore: Send + Sync {
    async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>, AppError>;

    async fn get_all_posts(&self) -> Result<Vec<Post>, AppError>;

    async fn get_posts_by_owner(&self, user_name: &str) -> Result<Vec<Post>, AppError>;

    /// Stores a new post, counter included.
    async fn add_post(&self, post: &Post) -> Result<(), AppError>;

    /// Writes every field of the post except `ratings`.
    async fn update_post(&self, post: &Post) -> Result<(), AppError>;

    /// Sets the rating counter of a post and nothing else.
    async fn update_post_ratings(&self, post_id: Uuid, ratings: u32) -> Result<(), AppError>;

    async fn get_post_rating(
        &self,
        post_id: Uuid,
        user_name: &str,
    ) -> Result<Option<PostRating>, AppError>;

    async fn get_ratings_by_user(&self, user_name: &str) -> Result<Vec<PostRating>, AppError>;

    async fn add_post_rating(&self, rating: &PostRating) -> Result<(), AppError>;

    async fn update_post_rating(&self, rating: &PostRating) -> Result<(), AppError>;

    /// Writes the counter and the rating record together: either both land or neither does.
    async fn commit_rating_change(
        &self,
        post_id: Uuid,
        ratings: u32,
        rating: &PostRating,
    ) -> Result<(), AppError>;

    async fn get_user(&self, user_alias: &str) -> Result<Option<User>, AppError>;

    /// Looks up the active user holding `email`, case-insensitively.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn get_all_users(&self) -> Result<Vec<User>, AppError>;

    async fn add_user(&self, user: &User) -> Result<(), AppError>;

    /// Overwrites the user. `previous_email` is released from the email index
    /// and the current one is claimed while the user stays active.
    async fn update_user(&self, user: &User, previous_email: &str) -> Result<(), AppError>;

    async fn add_ai_usage(&self, usage: &AiUsage) -> Result<(), AppError>;
}
