//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, send};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: unknown routes go through the error responder as a 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_route_not_found() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/api/unknown").await;

    assert!(!response.status().is_success());
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Route not found");
    assert_eq!(json["code"], "ROUTE_NOT_FOUND");
}

#[tokio::test]
async fn unknown_root_path_returns_route_not_found() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Route not found");
}

#[tokio::test]
async fn unsupported_method_returns_route_not_found() {
    let id = cineteca_core::types::new_movie_id();
    let cases = [
        (Method::POST, "/api/movies/list".to_string()),
        (Method::GET, "/api/movies/create".to_string()),
        (Method::PATCH, format!("/api/movies/{id}")),
        (Method::DELETE, "/health".to_string()),
    ];

    for (method, uri) in cases {
        let app = common::build_test_app(common::memory_store());
        let response = send(app, method.clone(), &uri, None).await;

        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{method} {uri}"
        );
        let json = body_json(response).await;
        assert_eq!(json["error"], "Route not found");
        assert_eq!(json["code"], "ROUTE_NOT_FOUND");
    }
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight from the web UI origin
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = common::build_test_app(common::memory_store());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/movies/create")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
