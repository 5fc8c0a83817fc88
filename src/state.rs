use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::BulletinStore,
    services::{
        AiRewriteService, PostRatingsService, PostsService, ProfilesService, UsersService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostsService>,
    pub ratings: Arc<PostRatingsService>,
    pub profiles: Arc<ProfilesService>,
    pub users: Arc<UsersService>,
    pub rewrite: Arc<AiRewriteService>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(config: &AppConfig, store: Arc<dyn BulletinStore>) -> Self {
        Self {
            posts: Arc::new(PostsService::new(store.clone())),
            ratings: Arc::new(PostRatingsService::new(
                store.clone(),
                config.rating_consistency,
            )),
            profiles: Arc::new(ProfilesService::new(store.clone())),
            users: Arc::new(UsersService::new(store.clone())),
            rewrite: Arc::new(AiRewriteService::new(config.ai.clone(), store)),
            jwt_secret: Arc::from(config.jwt_secret.as_str()),
        }
    }
}

pub type RedisClient = Pool<RedisConnectionManager>;
