pub mod get;
pub mod patch;
pub mod put;

pub use get::{get_all_posts, get_post_by_id, get_posts_by_owner};
pub use patch::{update_post, update_post_ratings};
pub use put::create_post;
