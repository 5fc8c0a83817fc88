pub mod get;
pub mod patch;
pub mod post;

pub use get::{get_all_users, get_user, get_user_by_email};
pub use patch::update_user;
pub use post::create_user;
