use std::sync::Arc;

use axum::{Json, Router, http::StatusCode, routing::post};
use bulletin_be::{
    config::AiConfig,
    db::MemoryStore,
    errors::AppError,
    models::ai_usage::REWRITE_STORY_USAGE,
    services::AiRewriteService,
};
use serde_json::{Value, json};

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn ai_config(base: &str) -> Option<AiConfig> {
    Some(AiConfig {
        url: format!("{base}/rewrite"),
        api_key: Some("key".into()),
    })
}

#[tokio::test]
async fn rewrites_story_and_records_usage() {
    let upstream = Router::new().route(
        "/rewrite",
        post(|Json(body): Json<Value>| async move {
            let story = body["story"].as_str().unwrap_or_default().to_uppercase();
            Json(json!({
                "content": format!("  {story}  "),
                "usage": { "totalTokens": 42, "candidatesTokenCount": 30, "promptTokenCount": 12 }
            }))
        }),
    );
    let base = spawn_upstream(upstream).await;

    let store = Arc::new(MemoryStore::new());
    let service = AiRewriteService::new(ai_config(&base), store.clone());

    let rewritten = service
        .rewrite_story("once upon a time", "alice")
        .await
        .unwrap();
    assert_eq!(rewritten, "ONCE UPON A TIME");

    let usages = store.ai_usages().await;
    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0].user_name, "alice");
    assert_eq!(usages[0].usage, REWRITE_STORY_USAGE);
    assert_eq!(usages[0].total_tokens_consumed, Some(42));
    assert_eq!(usages[0].candidates_token_count, Some(30));
    assert_eq!(usages[0].prompt_token_count, Some(12));
    assert!(usages[0].is_active);
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let upstream = Router::new().route(
        "/rewrite",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model overloaded") }),
    );
    let base = spawn_upstream(upstream).await;

    let store = Arc::new(MemoryStore::new());
    let service = AiRewriteService::new(ai_config(&base), store.clone());

    let err = service.rewrite_story("story", "alice").await.unwrap_err();
    assert!(matches!(err, AppError::UpstreamError(_)));
    assert_eq!(err.to_response().0, StatusCode::BAD_GATEWAY);
    assert!(store.ai_usages().await.is_empty());
}

#[tokio::test]
async fn blank_rewrite_is_internal_error() {
    let upstream = Router::new().route(
        "/rewrite",
        post(|| async { Json(json!({ "content": "   " })) }),
    );
    let base = spawn_upstream(upstream).await;

    let store = Arc::new(MemoryStore::new());
    let service = AiRewriteService::new(ai_config(&base), store.clone());

    let err = service.rewrite_story("story", "alice").await.unwrap_err();
    assert!(matches!(err, AppError::InternalError));
    assert!(store.ai_usages().await.is_empty());
}

#[tokio::test]
async fn empty_story_never_reaches_upstream() {
    let store = Arc::new(MemoryStore::new());
    // Nothing listens here; a request would fail with an upstream error instead.
    let service = AiRewriteService::new(ai_config("http://127.0.0.1:9"), store);

    let err = service.rewrite_story("   ", "alice").await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn missing_configuration_is_unavailable() {
    let service = AiRewriteService::new(None, Arc::new(MemoryStore::new()));
    let err = service.rewrite_story("story", "alice").await.unwrap_err();
    assert!(matches!(err, AppError::ServiceUnavailable(_)));
}
