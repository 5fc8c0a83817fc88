use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRating {
    pub post_id: Uuid,
    pub user_name: String,
    /// 1 when the user's last toggle left the post incremented, 0 otherwise.
    pub previous_rating_value: u8,
    pub rated_on: DateTime<Utc>,
    pub is_active: bool,
}

impl PostRating {
    pub fn first_rating(post_id: Uuid, user_name: &str) -> Self {
        Self {
            post_id,
            user_name: user_name.to_string(),
            previous_rating_value: 1,
            rated_on: Utc::now(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatingPayload {
    pub post_id: String,
    #[serde(default)]
    pub is_increment: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatingDto {
    pub has_already_updated: bool,
    pub is_update_success: bool,
}
