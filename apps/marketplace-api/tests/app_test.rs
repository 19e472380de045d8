//! End-to-end tests for the composed Marketplace API router
//!
//! The full app (docs, fallback, layers, health and both domains) runs
//! against an in-memory database with migrations applied.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_helpers::{CorsConfig, JwtConfig};
use core_config::{app_info, server::ServerConfig};
use database::common::RetryConfig;
use database::sqlite::SqliteConfig;
use domain_products::CatalogConfig;
use http_body_util::BodyExt;
use marketplace_api::config::Environment;
use marketplace_api::{AppState, Config};
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestDatabase, jwt::TEST_JWT_SECRET};
use tower::ServiceExt; // For oneshot()

fn test_config() -> Config {
    Config {
        app: app_info!(),
        server: ServerConfig::default(),
        environment: Environment::Development,
        database: SqliteConfig::in_memory(),
        retry: RetryConfig::default(),
        jwt: JwtConfig::new(TEST_JWT_SECRET),
        catalog: CatalogConfig::default(),
        cors: CorsConfig::permissive(),
    }
}

fn app(db: &TestDatabase) -> Router {
    let state = AppState::new(test_config(), db.connection());
    marketplace_api::app(&state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_health_reports_app_info() {
    let db = TestDatabase::new().await;

    let (status, body) = send(&app(&db), "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "marketplace_api");
}

#[tokio::test]
async fn test_ready_checks_the_database() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let (status, body) = send(&app, "GET", "/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ready", "database": "connected"}));

    db.connection().close().await.unwrap();

    let (status, body) = send(&app, "GET", "/ready", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_unknown_route_uses_error_body() {
    let db = TestDatabase::new().await;

    let (status, body) = send(&app(&db), "GET", "/nope", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_openapi_document_lists_every_route() {
    let db = TestDatabase::new().await;

    let (status, doc) = send(&app(&db), "GET", "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    for path in [
        "/auth/register",
        "/auth/login",
        "/products",
        "/products/{id}",
        "/products/{id}/favorite",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing path {}", path);
    }
    assert_eq!(
        doc["components"]["securitySchemes"]["bearer_auth"]["scheme"],
        "bearer"
    );
}

#[tokio::test]
async fn test_security_headers_are_applied_to_api_routes() {
    let db = TestDatabase::new().await;
    let request = Request::builder()
        .uri("/products")
        .body(Body::empty())
        .unwrap();

    let response = app(&db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
}

#[tokio::test]
async fn test_marketplace_flow() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let email = TestDataBuilder::from_test_name("marketplace_flow").email("ana");

    let (status, registered) = send(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(json!({"name": "Ana", "email": email, "password": "secret123"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(registered["user"]["email"], email.as_str());
    assert!(registered["user"].get("password").is_none());

    let (status, _) = send(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(json!({"name": "Ana", "email": email, "password": "secret123"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, logged_in) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({"email": email, "password": "secret123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = logged_in["token"].as_str().unwrap().to_string();

    for title in ["Mug", "Plate", "Teapot"] {
        let (status, _) = send(
            &app,
            "POST",
            "/products",
            Some(&token),
            Some(json!({"title": title, "price": 10.0, "description": "Kitchen"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, page) = send(&app, "GET", "/products?limit=2", Some(&token), None).await;
    assert_eq!(page["data"][0]["title"], "Teapot");
    assert_eq!(
        page["pagination"],
        json!({"page": 1, "limit": 2, "total": 3, "totalPages": 2})
    );
    let teapot = page["data"][0]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/products/{}/favorite", teapot),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Added to favorites");

    let (_, page) = send(&app, "GET", "/products?search=tea", Some(&token), None).await;
    assert_eq!(page["data"][0]["isFavorite"], true);

    let (_, page) = send(&app, "GET", "/products?search=tea", None, None).await;
    assert_eq!(page["data"][0]["isFavorite"], false);
}
