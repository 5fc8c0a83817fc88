use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by tokens from the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub exp: usize,
}

impl Claims {
    pub fn user_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.sub)
    }
}

/// Directory entry for a board member. Credentials stay with the identity
/// provider; `user_alias` is the token's user name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_alias: String,
    pub name: String,
    pub user_email: String,
    pub created_on: DateTime<Utc>,
    pub is_active: bool,
}

impl User {
    pub fn new(user_alias: String, name: String, user_email: String) -> Self {
        Self {
            user_alias,
            name,
            user_email,
            created_on: Utc::now(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub user_email: String,
}
