pub mod locks;
pub mod posts;
pub mod profiles;
pub mod ratings;
pub mod rewrite;
pub mod users;

pub use posts::PostsService;
pub use profiles::ProfilesService;
pub use ratings::PostRatingsService;
pub use rewrite::AiRewriteService;
pub use users::UsersService;

use uuid::Uuid;

use crate::errors::AppError;

pub const POST_NOT_FOUND: &str = "It seems the post you are looking for does not exists anymore!";
pub const POSTS_NOT_PRESENT: &str = "There are no posts to be shown at the moment!";
pub const POST_ID_NOT_PRESENT: &str = "The provided postId is null or empty.";
pub const POST_ID_NOT_VALID: &str = "The provided postId is not a valid GUID.";
pub const USER_NAME_MISSING: &str = "User Not Authorized";
pub const USER_ALREADY_EXISTS: &str = "The given user alias and the user email is already being used!";
pub const USER_NOT_FOUND: &str = "The user data does not exist with us anymore!";

pub fn parse_post_id(post_id: &str) -> Result<Uuid, AppError> {
    let trimmed = post_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidIdentifier(POST_ID_NOT_PRESENT.into()));
    }

    Uuid::parse_str(trimmed).map_err(|_| AppError::InvalidIdentifier(POST_ID_NOT_VALID.into()))
}

pub fn require_user_name(user_name: &str) -> Result<&str, AppError> {
    if user_name.trim().is_empty() {
        return Err(AppError::Unauthorized(USER_NAME_MISSING.into()));
    }
    Ok(user_name)
}
