pub mod ai_usage;
pub mod post;
pub mod post_rating;
pub mod profile;
pub mod redis;
pub mod user;

pub use post::Post;
pub use post_rating::PostRating;
