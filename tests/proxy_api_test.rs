use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::Query,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value as JsonValue};
use tokio::net::TcpListener;
use tower::ServiceExt;

use misdeed_backend::{routes, services::draft_store::JsonFileDraftStore, AppState};

/// A stand-in for the external backend: echoes creation bodies and reports
/// which endpoint received which query parameters.
async fn spawn_fake_backend() -> String {
    let app = Router::new()
        .route(
            "/api/jobs",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({ "endpoint": "jobs", "params": params }))
            })
            .post(|Json(body): Json<JsonValue>| async move {
                Json(json!({ "message": "Job submitted successfully", "echo": body }))
            }),
        )
        .route(
            "/api/misdeeds",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({ "endpoint": "list", "params": params }))
            }),
        )
        .route(
            "/api/misdeeds/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({ "endpoint": "search", "params": params }))
            }),
        );

    spawn_backend_app(app).await
}

/// A backend whose every endpoint fails.
async fn spawn_broken_backend() -> String {
    let app = Router::new()
        .route(
            "/api/jobs",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR })
                .post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/misdeeds",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );

    spawn_backend_app(app).await
}

async fn spawn_backend_app(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend");
    });
    format!("http://{}", addr)
}

fn proxy_app(backend_url: &str, drafts_dir: &tempfile::TempDir) -> Router {
    let store = JsonFileDraftStore::new(drafts_dir.path().join("user_jobs.json"));
    let state = AppState::with_store(backend_url, Arc::new(store));
    Router::new()
        .route(
            "/api/jobs",
            get(routes::jobs::list_jobs).post(routes::jobs::create_job),
        )
        .route("/api/misdeeds", get(routes::misdeeds::list_misdeeds))
        .with_state(state)
}

fn valid_job_body() -> JsonValue {
    json!({
        "title": "Need a Fake Date for a Wedding",
        "description": "Pretend to be my plus-one for an evening wedding, light small talk required.",
        "category": "Events & Gigs",
        "location": "Downtown Portland, OR",
        "pay_amount": 150.0,
        "pay_type": "Flat Rate",
        "contact_method": "Message me on the platform",
        "username": "totally_real_date"
    })
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn create_job_forwards_body_and_relays_response() {
    let backend = spawn_fake_backend().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let app = proxy_app(&backend, &dir);

    let req = Request::builder()
        .method("POST")
        .uri("/api/jobs")
        .header("content-type", "application/json")
        .body(Body::from(valid_job_body().to_string()))
        .expect("request");
    let resp = app.oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Job submitted successfully");
    assert_eq!(body["echo"], valid_job_body());
}

#[tokio::test]
async fn create_job_rejects_each_missing_field_before_contacting_backend() {
    // Unroutable backend address: a 400 here proves nothing was forwarded.
    let dir = tempfile::tempdir().expect("tempdir");
    let app = proxy_app("http://127.0.0.1:1", &dir);

    for field in [
        "title",
        "description",
        "category",
        "location",
        "pay_amount",
        "pay_type",
        "contact_method",
        "username",
    ] {
        let mut body = valid_job_body();
        body.as_object_mut().expect("object").remove(field);
        let req = Request::builder()
            .method("POST")
            .uri("/api/jobs")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        let resp = app.clone().oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(
            body,
            json!({ "error": format!("Missing required field: {}", field) })
        );
    }
}

#[tokio::test]
async fn create_job_treats_null_title_as_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = proxy_app("http://127.0.0.1:1", &dir);

    let mut body = valid_job_body();
    body["title"] = JsonValue::Null;
    let req = Request::builder()
        .method("POST")
        .uri("/api/jobs")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    let resp = app.oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Missing required field: title" })
    );
}

#[tokio::test]
async fn backend_failure_becomes_a_generic_create_error() {
    let backend = spawn_broken_backend().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let app = proxy_app(&backend, &dir);

    let req = Request::builder()
        .method("POST")
        .uri("/api/jobs")
        .header("content-type", "application/json")
        .body(Body::from(valid_job_body().to_string()))
        .expect("request");
    let resp = app.oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Failed to create job posting" })
    );
}

#[tokio::test]
async fn list_jobs_applies_default_limit_and_forwards_category() {
    let backend = spawn_fake_backend().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let app = proxy_app(&backend, &dir);

    let req = Request::builder()
        .method("GET")
        .uri("/api/jobs?category=Events%20%26%20Gigs")
        .body(Body::empty())
        .expect("request");
    let resp = app.oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["endpoint"], "jobs");
    assert_eq!(body["params"]["limit"], "100");
    assert_eq!(body["params"]["category"], "Events & Gigs");
}

#[tokio::test]
async fn misdeeds_listing_uses_defaults_and_routes_search_separately() {
    let backend = spawn_fake_backend().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let app = proxy_app(&backend, &dir);

    let req = Request::builder()
        .method("GET")
        .uri("/api/misdeeds")
        .body(Body::empty())
        .expect("request");
    let resp = app.clone().oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["endpoint"], "list");
    assert_eq!(body["params"]["limit"], "50");
    assert_eq!(body["params"]["min_score"], "5");

    let req = Request::builder()
        .method("GET")
        .uri("/api/misdeeds?search=crypto&limit=10")
        .body(Body::empty())
        .expect("request");
    let resp = app.oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["endpoint"], "search");
    assert_eq!(body["params"]["q"], "crypto");
    assert_eq!(body["params"]["limit"], "10");
    assert_eq!(body["params"]["min_score"], "5");
}

#[tokio::test]
async fn misdeeds_backend_failure_becomes_a_generic_fetch_error() {
    let backend = spawn_broken_backend().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let app = proxy_app(&backend, &dir);

    let req = Request::builder()
        .method("GET")
        .uri("/api/misdeeds")
        .body(Body::empty())
        .expect("request");
    let resp = app.oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Failed to fetch misdeeds" })
    );
}
