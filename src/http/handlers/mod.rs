pub mod ai;
pub mod posts;
pub mod profiles;
pub mod ratings;
pub mod users;

pub use ai::rewrite_story_handler;
pub use posts::{
    add_post_handler, delete_post_handler, get_all_posts_handler, get_post_handler,
    update_post_handler,
};
pub use profiles::get_profile_handler;
pub use ratings::update_rating_handler;
pub use users::{
    add_user_handler, delete_user_handler, get_all_users_handler, get_user_handler,
    update_user_handler,
};
