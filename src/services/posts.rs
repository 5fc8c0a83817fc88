use std::sync::Arc;

use crate::{
    db::BulletinStore,
    errors::AppError,
    models::{Post, post::PostPayload},
    services::{POST_NOT_FOUND, POSTS_NOT_PRESENT, parse_post_id, require_user_name},
};

const MAX_TITLE_LEN: usize = 200;

pub struct PostsService {
    store: Arc<dyn BulletinStore>,
}

impl PostsService {
    pub fn new(store: Arc<dyn BulletinStore>) -> Self {
        Self { store }
    }

    pub async fn get_post(&self, post_id: &str) -> Result<Post, AppError> {
        let post_id = parse_post_id(post_id)?;
        self.store
            .get_post(post_id)
            .await?
            .filter(|p| p.is_active)
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.into()))
    }

    /// Active posts, newest first.
    pub async fn get_all_posts(&self) -> Result<Vec<Post>, AppError> {
        let mut posts: Vec<Post> = self
            .store
            .get_all_posts()
            .await?
            .into_iter()
            .filter(|p| p.is_active)
            .collect();

        if posts.is_empty() {
            return Err(AppError::NotFound(POSTS_NOT_PRESENT.into()));
        }

        posts.sort_by(|a, b| b.post_created_date.cmp(&a.post_created_date));
        Ok(posts)
    }

    pub async fn add_new_post(&self, payload: PostPayload, owner: &str) -> Result<Post, AppError> {
        let owner = require_user_name(owner)?;
        let (title, content) = validate_payload(payload)?;

        let post = Post::new(title, content, owner.to_string());
        self.store.add_post(&post).await?;

        tracing::info!("Post {} added by {}", post.post_id, owner);
        Ok(post)
    }

    /// Edits title and content. Ratings are never taken from the caller.
    pub async fn update_post(
        &self,
        post_id: &str,
        payload: PostPayload,
        user_name: &str,
    ) -> Result<Post, AppError> {
        let user_name = require_user_name(user_name)?;
        let (title, content) = validate_payload(payload)?;
        let mut post = self.get_post(post_id).await?;
        ensure_owner(&post, user_name)?;

        post.post_title = title;
        post.post_content = content;
        self.store.update_post(&post).await?;

        tracing::info!("Post {} updated by {}", post.post_id, user_name);
        Ok(post)
    }

    /// Soft delete: the post stays in the store with `is_active = false`.
    pub async fn delete_post(&self, post_id: &str, user_name: &str) -> Result<bool, AppError> {
        let user_name = require_user_name(user_name)?;
        let mut post = self.get_post(post_id).await?;
        ensure_owner(&post, user_name)?;

        post.is_active = false;
        self.store.update_post(&post).await?;

        tracing::info!("Post {} deleted by {}", post.post_id, user_name);
        Ok(true)
    }
}

fn validate_payload(payload: PostPayload) -> Result<(String, String), AppError> {
    let title = payload.post_title.trim().to_string();
    let content = payload.post_content.trim().to_string();

    if title.is_empty() {
        return Err(AppError::BadRequest("Post title cannot be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::BadRequest(format!(
            "Post title cannot exceed {MAX_TITLE_LEN} characters"
        )));
    }
    if content.is_empty() {
        return Err(AppError::BadRequest("Post content cannot be empty".into()));
    }

    Ok((title, content))
}

fn ensure_owner(post: &Post, user_name: &str) -> Result<(), AppError> {
    if post.post_owner_user_name != user_name {
        return Err(AppError::Forbidden(
            "Only the owner of a post can change it".into(),
        ));
    }
    Ok(())
}
