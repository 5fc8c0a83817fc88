use std::{sync::Arc, time::Duration};

use bulletin_be::{
    config::RatingConsistency,
    db::{BulletinStore, MemoryStore},
    errors::AppError,
    models::post::PostPayload,
    services::{PostRatingsService, PostsService, ProfilesService},
};
use uuid::Uuid;

fn payload(title: &str, content: &str) -> PostPayload {
    PostPayload {
        post_title: title.into(),
        post_content: content.into(),
    }
}

#[tokio::test]
async fn add_and_fetch_post() {
    let store = Arc::new(MemoryStore::new());
    let posts = PostsService::new(store.clone());

    let created = posts
        .add_new_post(payload("  Lost cat ", "Grey, answers to Miso"), "alice")
        .await
        .unwrap();

    assert_eq!(created.post_title, "Lost cat");
    assert_eq!(created.ratings, 0);
    assert!(created.is_active);
    assert_eq!(created.post_owner_user_name, "alice");

    let fetched = posts.get_post(&created.post_id.to_string()).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn empty_title_or_content_is_rejected() {
    let posts = PostsService::new(Arc::new(MemoryStore::new()));

    let err = posts
        .add_new_post(payload(" ", "body"), "alice")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = posts
        .add_new_post(payload("title", ""), "alice")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn listing_is_newest_first_and_skips_deleted() {
    let store = Arc::new(MemoryStore::new());
    let posts = PostsService::new(store.clone());

    let older = posts
        .add_new_post(payload("older", "a"), "alice")
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let newer = posts
        .add_new_post(payload("newer", "b"), "bob")
        .await
        .unwrap();
    let gone = posts
        .add_new_post(payload("gone", "c"), "alice")
        .await
        .unwrap();
    posts
        .delete_post(&gone.post_id.to_string(), "alice")
        .await
        .unwrap();

    let all = posts.get_all_posts().await.unwrap();
    let ids: Vec<Uuid> = all.iter().map(|p| p.post_id).collect();
    assert_eq!(ids, vec![newer.post_id, older.post_id]);
}

#[tokio::test]
async fn empty_board_is_not_found() {
    let posts = PostsService::new(Arc::new(MemoryStore::new()));
    assert!(matches!(
        posts.get_all_posts().await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn only_owner_can_edit_or_delete() {
    let store = Arc::new(MemoryStore::new());
    let posts = PostsService::new(store.clone());
    let post = posts
        .add_new_post(payload("mine", "content"), "alice")
        .await
        .unwrap();
    let id = post.post_id.to_string();

    let err = posts
        .update_post(&id, payload("hijacked", "content"), "mallory")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let err = posts.delete_post(&id, "mallory").await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let updated = posts
        .update_post(&id, payload("edited", "new content"), "alice")
        .await
        .unwrap();
    assert_eq!(updated.post_title, "edited");
    assert_eq!(updated.post_content, "new content");
}

#[tokio::test]
async fn edit_keeps_accumulated_ratings() {
    let store = Arc::new(MemoryStore::new());
    let posts = PostsService::new(store.clone());
    let ratings = PostRatingsService::new(store.clone(), RatingConsistency::Unguarded);

    let post = posts
        .add_new_post(payload("rated", "content"), "alice")
        .await
        .unwrap();
    let id = post.post_id.to_string();
    ratings.update_rating(&id, true, "bob").await.unwrap();
    ratings.update_rating(&id, true, "carol").await.unwrap();

    let updated = posts
        .update_post(&id, payload("rated, edited", "content"), "alice")
        .await
        .unwrap();
    assert_eq!(updated.ratings, 2);
}

#[tokio::test]
async fn deleted_post_is_soft_deleted() {
    let store = Arc::new(MemoryStore::new());
    let posts = PostsService::new(store.clone());
    let post = posts
        .add_new_post(payload("bye", "content"), "alice")
        .await
        .unwrap();
    let id = post.post_id.to_string();

    assert!(posts.delete_post(&id, "alice").await.unwrap());
    assert!(matches!(
        posts.get_post(&id).await,
        Err(AppError::NotFound(_))
    ));

    let raw = store.get_post(post.post_id).await.unwrap().unwrap();
    assert!(!raw.is_active);
}

#[tokio::test]
async fn malformed_post_id_is_invalid_identifier() {
    let posts = PostsService::new(Arc::new(MemoryStore::new()));
    assert!(matches!(
        posts.get_post("nope").await,
        Err(AppError::InvalidIdentifier(_))
    ));
}

#[tokio::test]
async fn profile_lists_own_posts_and_ratings() {
    let store = Arc::new(MemoryStore::new());
    let posts = PostsService::new(store.clone());
    let ratings = PostRatingsService::new(store.clone(), RatingConsistency::Unguarded);
    let profiles = ProfilesService::new(store.clone());

    let own = posts
        .add_new_post(payload("own", "content"), "alice")
        .await
        .unwrap();
    let deleted = posts
        .add_new_post(payload("deleted", "content"), "alice")
        .await
        .unwrap();
    posts
        .delete_post(&deleted.post_id.to_string(), "alice")
        .await
        .unwrap();
    let other = posts
        .add_new_post(payload("other", "content"), "bob")
        .await
        .unwrap();
    ratings
        .update_rating(&other.post_id.to_string(), true, "alice")
        .await
        .unwrap();

    let profile = profiles.get_user_profile("alice").await.unwrap();
    assert_eq!(profile.user_name, "alice");
    assert_eq!(profile.user_posts.len(), 1);
    assert_eq!(profile.user_posts[0].post_id, own.post_id);
    assert_eq!(profile.user_post_ratings.len(), 1);
    assert_eq!(profile.user_post_ratings[0].post_id, other.post_id);
    assert_eq!(profile.user_post_ratings[0].previous_rating_value, 1);

    let empty = profiles.get_user_profile("nobody").await.unwrap();
    assert!(empty.user_posts.is_empty());
    assert!(empty.user_post_ratings.is_empty());

    assert!(matches!(
        profiles.get_user_profile("").await,
        Err(AppError::Unauthorized(_))
    ));
}
