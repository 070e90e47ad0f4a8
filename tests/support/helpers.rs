// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryEvents, InMemoryPosts};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use bulletin_core::application::services::ApplicationServices;
use bulletin_core::infrastructure::util::LocaleSlugGenerator;
use bulletin_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_TIMEZONE: chrono_tz::Tz = chrono_tz::Europe::Lisbon;

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub posts: Arc<InMemoryPosts>,
    pub events: Arc<InMemoryEvents>,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(InMemoryPosts::new(), InMemoryEvents::new())
}

pub fn build_test_app_with(posts: InMemoryPosts, events: InMemoryEvents) -> TestApp {
    let posts = Arc::new(posts);
    let events = Arc::new(events);
    let services = Arc::new(ApplicationServices::new(
        posts.clone(),
        posts.clone(),
        events.clone(),
        Arc::new(FixedClock),
        Arc::new(LocaleSlugGenerator),
        TEST_TIMEZONE,
    ));
    TestApp {
        services,
        posts,
        events,
    }
}

pub fn make_test_router(app: &TestApp) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&app.services),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected JSON body")
}

/// Assert an error response carries the expected status and the
/// `{ "error", "message" }` body shape.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message"
    );
}
