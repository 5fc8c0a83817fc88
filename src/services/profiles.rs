use std::sync::Arc;

use crate::{
    db::BulletinStore,
    errors::AppError,
    models::profile::UserProfile,
    services::require_user_name,
};

pub struct ProfilesService {
    store: Arc<dyn BulletinStore>,
}

impl ProfilesService {
    pub fn new(store: Arc<dyn BulletinStore>) -> Self {
        Self { store }
    }

    pub async fn get_user_profile(&self, user_name: &str) -> Result<UserProfile, AppError> {
        let user_name = require_user_name(user_name)?;

        let (posts, mut ratings) = futures::try_join!(
            self.store.get_posts_by_owner(user_name),
            self.store.get_ratings_by_user(user_name)
        )?;

        let mut user_posts: Vec<_> = posts.into_iter().filter(|p| p.is_active).collect();
        user_posts.sort_by(|a, b| b.post_created_date.cmp(&a.post_created_date));
        ratings.sort_by(|a, b| b.rated_on.cmp(&a.rated_on));

        Ok(UserProfile {
            user_name: user_name.to_string(),
            user_posts,
            user_post_ratings: ratings,
        })
    }
}
