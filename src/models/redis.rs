use uuid::Uuid;

pub struct RedisKey;

impl RedisKey {
    pub fn post(post_id: Uuid) -> String {
        format!("post:{post_id}")
    }

    /// Rating counter of a post, kept apart from the post body.
    pub fn post_ratings(post_id: Uuid) -> String {
        format!("post:{post_id}:ratings")
    }

    pub fn posts() -> String {
        "posts".to_string()
    }

    pub fn user_posts(user_name: &str) -> String {
        format!("user:{user_name}:posts")
    }

    pub fn post_rating(post_id: Uuid, user_name: &str) -> String {
        format!("post_rating:{post_id}:{user_name}")
    }

    pub fn user_ratings(user_name: &str) -> String {
        format!("user:{user_name}:ratings")
    }

    pub fn user(user_alias: &str) -> String {
        format!("user:{user_alias}")
    }

    pub fn users() -> String {
        "users".to_string()
    }

    pub fn user_email(email: &str) -> String {
        let email = email.to_lowercase();
        format!("user_email:{email}")
    }

    pub fn ai_usage(id: Uuid) -> String {
        format!("ai_usage:{id}")
    }

    pub fn user_ai_usages(user_name: &str) -> String {
        format!("user:{user_name}:ai_usages")
    }
}
