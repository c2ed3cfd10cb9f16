//! Integration tests for the article client against a live API server.
//!
//! Each test binds the real router on an ephemeral port and talks to it over
//! HTTP. Failure cases point the client at a closed port or at a stub server
//! that answers every request with an error.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use folio_api::config::{CorsOrigins, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_client::{ArticleApiClient, ArticleService, ClientConfig};
use folio_core::article::ArticleInput;
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_api(pool: SqlitePool) -> String {
    let config = ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        seed_sample_data: false,
    };
    serve(build_app_router(AppState { pool }, &config)).await
}

/// An address nothing is listening on.
async fn closed_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A server that answers every request with 500.
async fn spawn_failing_upstream() -> String {
    let app = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    serve(app).await
}

/// A server that answers every request with 200 and a non-JSON body.
async fn spawn_garbage_upstream() -> String {
    let app = Router::new().fallback(|| async { "definitely not json" });
    serve(app).await
}

/// A server that answers list and get with upper-cased field names.
async fn spawn_shouting_upstream() -> String {
    let article = json!({
        "ID": 5,
        "TITLE": "Loud",
        "CONTENT": "Body",
        "CREATEDAT": "2024-01-01T00:00:00Z",
        "UPDATEDAT": null,
    });
    let list = json!([article.clone()]);
    let app = Router::new()
        .route("/api/articles", get(move || async move { Json(list) }))
        .route("/api/articles/{id}", get(move || async move { Json(article) }));
    serve(app).await
}

async fn assert_all_sentinels(service: &ArticleService) {
    let input = ArticleInput::new("Title", "Content");
    assert!(service.list_articles().await.is_empty());
    assert!(service.get_article(1).await.is_none());
    assert!(service.create_article(&input).await.is_none());
    assert!(!service.update_article(1, &input).await);
    assert!(!service.delete_article(1).await);
}

// ---------------------------------------------------------------------------
// Round trips through the live API
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn service_mirrors_crud_operations(pool: SqlitePool) {
    let base_url = spawn_api(pool).await;
    let service = ArticleService::new(&ClientConfig::new(base_url));

    assert!(service.list_articles().await.is_empty());

    let created = service
        .create_article(&ArticleInput::new("  Hello ", "World"))
        .await
        .expect("create should succeed");
    assert_eq!(created.title, "Hello");
    assert!(created.updated_at.is_none());

    let fetched = service.get_article(created.id).await.unwrap();
    assert_eq!(fetched, created);

    assert!(
        service
            .update_article(created.id, &ArticleInput::new("Hello again", "World 2"))
            .await
    );
    let updated = service.get_article(created.id).await.unwrap();
    assert_eq!(updated.title, "Hello again");
    assert!(updated.updated_at.is_some());

    let all = service.list_articles().await;
    assert_eq!(all.len(), 1);

    assert!(service.delete_article(created.id).await);
    assert!(service.get_article(created.id).await.is_none());
    assert!(!service.delete_article(created.id).await);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn service_lists_seeded_articles(pool: SqlitePool) {
    folio_db::seed::seed_if_empty(&pool).await.unwrap();
    let base_url = spawn_api(pool).await;
    let service = ArticleService::new(&ClientConfig::new(base_url));

    assert_eq!(service.list_articles().await.len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn service_reports_validation_rejection_as_sentinel(pool: SqlitePool) {
    let base_url = spawn_api(pool).await;
    let service = ArticleService::new(&ClientConfig::new(base_url));

    assert!(service
        .create_article(&ArticleInput::new("   ", "body"))
        .await
        .is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn strict_client_distinguishes_not_found_from_other_errors(pool: SqlitePool) {
    let base_url = spawn_api(pool).await;
    let api = ArticleApiClient::new(base_url);

    let err = api.get_article(999_999).await.unwrap_err();
    assert!(err.is_not_found());

    let err = api
        .create_article(&ArticleInput::new("", "body"))
        .await
        .unwrap_err();
    match err {
        folio_client::ClientError::ApiError { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("VALIDATION_ERROR"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn upstream_field_names_are_matched_in_any_case() {
    let service = ArticleService::new(&ClientConfig::new(spawn_shouting_upstream().await));

    let all = service.list_articles().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Loud");

    let article = service.get_article(5).await.expect("article should decode");
    assert_eq!(article.id, 5);
    assert_eq!(article.content, "Body");
    assert!(article.updated_at.is_none());
}

// ---------------------------------------------------------------------------
// Upstream failures collapse to sentinels
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_upstream_returns_sentinels() {
    let service = ArticleService::new(&ClientConfig::new(closed_address().await));
    assert_all_sentinels(&service).await;

    let err = service.api().list_articles().await.unwrap_err();
    assert!(matches!(err, folio_client::ClientError::Request(_)));
}

#[tokio::test]
async fn non_success_upstream_returns_sentinels() {
    let service = ArticleService::new(&ClientConfig::new(spawn_failing_upstream().await));
    assert_all_sentinels(&service).await;

    let err = service.api().get_article(1).await.unwrap_err();
    assert!(matches!(
        err,
        folio_client::ClientError::ApiError { status: 500, .. }
    ));
}

#[tokio::test]
async fn undecodable_upstream_body_returns_sentinels() {
    let service = ArticleService::new(&ClientConfig::new(spawn_garbage_upstream().await));

    assert!(service.list_articles().await.is_empty());
    assert!(service.get_article(1).await.is_none());
    assert!(service
        .create_article(&ArticleInput::new("T", "C"))
        .await
        .is_none());
}
