pub mod get;
pub mod patch;
pub mod post;

pub use get::{get_post_rating, get_ratings_by_user};
pub use patch::{commit_rating_change, update_post_rating};
pub use post::create_post_rating;
