//! Post rating toggles.
//!
//! Each user holds at most one rating record per post. The first action on a
//! post creates the record and bumps the post's counter; every later action
//! flips the stored value and moves the counter the opposite way, floored at
//! zero. The counter on the post is a denormalized sum of those records and
//! nothing but this service keeps the two in line. Only the counter is written
//! back, so a concurrent edit or delete of the post keeps its other fields.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::RatingConsistency,
    db::BulletinStore,
    errors::AppError,
    models::{Post, PostRating, post_rating::UpdateRatingDto},
    services::{POST_NOT_FOUND, locks::PostLocks, parse_post_id, require_user_name},
};

/// What a single toggle decided, before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingChange {
    pub post: Post,
    pub rating: PostRating,
    pub has_already_updated: bool,
}

/// Applies one toggle for `user_name` to `post`.
///
/// The direction comes from the stored record alone.
pub fn apply_toggle(mut post: Post, existing: Option<PostRating>, user_name: &str) -> RatingChange {
    match existing {
        Some(mut rating) => {
            if rating.previous_rating_value == 0 {
                post.increment_rating();
                rating.previous_rating_value = 1;
            } else {
                post.decrement_rating();
                rating.previous_rating_value = 0;
            }
            rating.rated_on = Utc::now();

            RatingChange {
                post,
                rating,
                has_already_updated: true,
            }
        }
        None => {
            post.increment_rating();
            let rating = PostRating::first_rating(post.post_id, user_name);

            RatingChange {
                post,
                rating,
                has_already_updated: false,
            }
        }
    }
}

pub struct PostRatingsService {
    store: Arc<dyn BulletinStore>,
    consistency: RatingConsistency,
    locks: PostLocks,
}

impl PostRatingsService {
    pub fn new(store: Arc<dyn BulletinStore>, consistency: RatingConsistency) -> Self {
        Self {
            store,
            consistency,
            locks: PostLocks::new(),
        }
    }

    /// Toggles the caller's rating on a post.
    ///
    /// `is_increment` is accepted for API compatibility and logged, but the
    /// stored record decides whether the counter goes up or down.
    pub async fn update_rating(
        &self,
        post_id: &str,
        is_increment: bool,
        user_name: &str,
    ) -> Result<UpdateRatingDto, AppError> {
        let post_id = parse_post_id(post_id)?;
        let user_name = require_user_name(user_name)?;

        tracing::info!("Updating rating of post {} for {}", post_id, user_name);
        tracing::debug!(
            "Requested direction is_increment={} ignored; stored rating decides",
            is_increment
        );

        // The counter is shared by every user of the post, so the lock is per post.
        let _guard = match self.consistency {
            RatingConsistency::Unguarded => None,
            RatingConsistency::PostLock | RatingConsistency::Atomic => {
                Some(self.locks.lock(post_id).await)
            }
        };

        let result = self.toggle(post_id, user_name).await;
        match &result {
            Ok(dto) => tracing::info!(
                "Rating of post {} updated for {} (already rated: {})",
                post_id,
                user_name,
                dto.has_already_updated
            ),
            Err(e) => tracing::error!(
                "Failed to update rating of post {} for {}: {}",
                post_id,
                user_name,
                e
            ),
        }
        result
    }

    async fn toggle(&self, post_id: Uuid, user_name: &str) -> Result<UpdateRatingDto, AppError> {
        let (post, rating) = self.get_post_and_rating(post_id, user_name).await?;
        let post = post
            .filter(|p| p.is_active)
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.into()))?;

        let change = apply_toggle(post, rating, user_name);
        self.persist(&change).await?;

        Ok(UpdateRatingDto {
            has_already_updated: change.has_already_updated,
            is_update_success: true,
        })
    }

    async fn get_post_and_rating(
        &self,
        post_id: Uuid,
        user_name: &str,
    ) -> Result<(Option<Post>, Option<PostRating>), AppError> {
        tokio::try_join!(
            self.store.get_post(post_id),
            self.store.get_post_rating(post_id, user_name)
        )
    }

    async fn persist(&self, change: &RatingChange) -> Result<(), AppError> {
        let post_id = change.post.post_id;
        let ratings = change.post.ratings;

        if self.consistency == RatingConsistency::Atomic {
            return self
                .store
                .commit_rating_change(post_id, ratings, &change.rating)
                .await;
        }

        // Two independent writes: a failed rating write leaves the counter already moved.
        self.store.update_post_ratings(post_id, ratings).await?;
        if change.has_already_updated {
            self.store.update_post_rating(&change.rating).await
        } else {
            self.store.add_post_rating(&change.rating).await
        }
    }
}
