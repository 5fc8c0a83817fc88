use std::sync::Arc;

use crate::{
    db::BulletinStore,
    errors::AppError,
    models::user::{User, UserPayload},
    services::{USER_ALREADY_EXISTS, USER_NOT_FOUND, require_user_name},
};

const MAX_NAME_LEN: usize = 100;

/// Member directory. Each caller registers, edits and leaves under the alias
/// their token carries; lookups are open to any signed-in caller.
pub struct UsersService {
    store: Arc<dyn BulletinStore>,
}

impl UsersService {
    pub fn new(store: Arc<dyn BulletinStore>) -> Self {
        Self { store }
    }

    pub async fn get_user_details(&self, user_alias: &str) -> Result<User, AppError> {
        let user_alias = user_alias.trim();
        if user_alias.is_empty() {
            return Err(AppError::BadRequest("User alias cannot be empty".into()));
        }

        self.active_user(user_alias).await
    }

    /// Active users ordered by alias. An empty directory is not an error.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let mut users: Vec<User> = self
            .store
            .get_all_users()
            .await?
            .into_iter()
            .filter(|u| u.is_active)
            .collect();
        users.sort_by(|a, b| a.user_alias.cmp(&b.user_alias));
        Ok(users)
    }

    pub async fn add_new_user(
        &self,
        payload: UserPayload,
        user_alias: &str,
    ) -> Result<User, AppError> {
        let user_alias = require_user_name(user_alias)?;
        let (name, email) = validate_payload(payload)?;

        let (existing, email_owner) = tokio::try_join!(
            self.store.get_user(user_alias),
            self.store.get_user_by_email(&email)
        )?;
        if existing.is_some_and(|u| u.is_active) || email_owner.is_some() {
            return Err(AppError::Conflict(USER_ALREADY_EXISTS.into()));
        }

        let user = User::new(user_alias.to_string(), name, email);
        self.store.add_user(&user).await?;

        tracing::info!("User {} registered", user.user_alias);
        Ok(user)
    }

    pub async fn update_user(
        &self,
        payload: UserPayload,
        user_alias: &str,
    ) -> Result<User, AppError> {
        let user_alias = require_user_name(user_alias)?;
        let (name, email) = validate_payload(payload)?;

        let mut user = self.active_user(user_alias).await?;
        let taken_by_other = self
            .store
            .get_user_by_email(&email)
            .await?
            .is_some_and(|owner| owner.user_alias != user.user_alias);
        if taken_by_other {
            return Err(AppError::Conflict(USER_ALREADY_EXISTS.into()));
        }

        let previous_email = std::mem::replace(&mut user.user_email, email);
        user.name = name;
        self.store.update_user(&user, &previous_email).await?;

        tracing::info!("User {} updated", user.user_alias);
        Ok(user)
    }

    /// Soft delete. The email becomes free for a new registration.
    pub async fn delete_user(&self, user_alias: &str) -> Result<bool, AppError> {
        let user_alias = require_user_name(user_alias)?;
        let mut user = self.active_user(user_alias).await?;

        user.is_active = false;
        self.store.update_user(&user, &user.user_email).await?;

        tracing::info!("User {} deleted", user.user_alias);
        Ok(true)
    }

    async fn active_user(&self, user_alias: &str) -> Result<User, AppError> {
        self.store
            .get_user(user_alias)
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.into()))
    }
}

fn validate_payload(payload: UserPayload) -> Result<(String, String), AppError> {
    let name = payload.name.trim().to_string();
    let email = payload.user_email.trim().to_lowercase();

    if name.is_empty() {
        return Err(AppError::BadRequest("Name cannot be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
        _ => return Err(AppError::BadRequest("A valid email is required".into())),
    }

    Ok((name, email))
}
