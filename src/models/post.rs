use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: Uuid,
    pub post_title: String,
    pub post_content: String,
    /// Aggregate of the active per-user toggles. Only the rating workflow moves it,
    /// and stores keep it apart from the other fields.
    pub ratings: u32,
    pub post_created_date: DateTime<Utc>,
    pub post_owner_user_name: String,
    pub is_active: bool,
}

impl Post {
    pub fn new(title: String, content: String, owner: String) -> Self {
        Self {
            post_id: Uuid::new_v4(),
            post_title: title,
            post_content: content,
            ratings: 0,
            post_created_date: Utc::now(),
            post_owner_user_name: owner,
            is_active: true,
        }
    }

    pub fn increment_rating(&mut self) {
        self.ratings = self.ratings.saturating_add(1);
    }

    /// Floors at zero.
    pub fn decrement_rating(&mut self) {
        self.ratings = self.ratings.saturating_sub(1);
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub post_title: String,
    pub post_content: String,
}
