// tests/support/helpers.rs
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{HeaderMap, Request, StatusCode, header::LOCATION};
use blogfolio::application::services::ApplicationServices;
use blogfolio::infrastructure::static_site::StaticSite;
use blogfolio::presentation::http::{routes::build_router, state::HttpState};
use blogfolio::presentation::routing::RouteTable;
use once_cell::sync::Lazy;
use tower::util::ServiceExt as _;

pub const BASE_URL: &str = "https://blog.test";

static SERVICES: Lazy<Arc<ApplicationServices>> =
    Lazy::new(|| Arc::new(blogfolio::site_services().expect("site content is complete")));

pub fn fixture_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture_template(name: &str) -> String {
    std::fs::read_to_string(fixture_dir(name).join("index.html")).expect("fixture template")
}

pub fn build_test_state_with(site: StaticSite, routes: RouteTable) -> HttpState {
    HttpState {
        services: Arc::clone(&SERVICES),
        routes: Arc::new(routes),
        site,
        base_url: Arc::from(BASE_URL),
    }
}

pub fn build_test_state(site_dir: PathBuf) -> HttpState {
    build_test_state_with(
        StaticSite::new(site_dir),
        RouteTable::site().expect("site routes are valid"),
    )
}

/// Router over the fixture site with the real content and routes.
pub fn make_test_router() -> axum::Router {
    build_router(build_test_state(fixture_dir("site")))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }
}

pub async fn get(app: &axum::Router, uri: &str) -> TestResponse {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 4 * 1024 * 1024).await.unwrap();
    TestResponse {
        status,
        headers: parts.headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Asserts a 301 pointing at `expected`.
pub fn assert_permanent_redirect(resp: &TestResponse, expected: &str) {
    assert_eq!(
        resp.status,
        StatusCode::MOVED_PERMANENTLY,
        "expected 301, got {}: {}",
        resp.status,
        resp.body
    );
    assert_eq!(resp.location(), Some(expected));
}
