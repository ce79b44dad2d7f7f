// tests/e2e_routing.rs
use axum::http::StatusCode;
use serde_json::Value;

mod support;

#[tokio::test]
async fn root_redirects_permanently_to_blog() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/").await;
    support::assert_permanent_redirect(&resp, "/blog");
}

#[tokio::test]
async fn unmatched_paths_redirect_to_error() {
    let app = support::make_test_router();
    for uri in ["/unknown", "/blog/a/b/c", "/portfolio/extra", "/errors"] {
        let resp = support::get(&app, uri).await;
        support::assert_permanent_redirect(&resp, "/error");
    }
}

#[tokio::test]
async fn redirect_targets_render_without_further_redirects() {
    let app = support::make_test_router();
    for uri in ["/blog", "/error"] {
        let resp = support::get(&app, uri).await;
        assert_eq!(resp.status, StatusCode::OK, "{uri}: {}", resp.body);
        assert!(resp.content_type().starts_with("text/html"));
    }
}

#[tokio::test]
async fn trailing_slashes_are_accepted() {
    let app = support::make_test_router();
    for uri in ["/blog/", "/portfolio/", "/error/", "/blog/webrtc/", "/blog/sudoku-generation/ca/"] {
        let resp = support::get(&app, uri).await;
        assert_eq!(resp.status, StatusCode::OK, "{uri}");
        assert!(resp.body.contains("app-container server-rendered"), "{uri}");
    }
}

#[tokio::test]
async fn existing_static_files_are_served_as_is() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/robots.txt").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "User-agent: *\nAllow: /\n");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(
        resp.content_type().starts_with("application/json"),
        "unexpected content-type: {}",
        resp.content_type()
    );
    let json: Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(json["status"], "ok");

    let direct = blogfolio::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}
