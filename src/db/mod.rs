pub mod ai_usage;
pub mod memory;
pub mod post;
pub mod post_rating;
pub mod redis_client;
pub mod store;
pub mod user;

pub use memory::MemoryStore;
pub use redis_client::RedisStore;
pub use store::BulletinStore;

use serde::{Serialize, de::DeserializeOwned};

use crate::errors::AppError;

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|e| AppError::Serialization(e.to_string()))
}

pub(crate) fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, AppError> {
    serde_json::from_str(json).map_err(|e| AppError::Deserialization(e.to_string()))
}
