// tests/e2e_render.rs
use axum::http::StatusCode;
use blogfolio::domain::article::{ArticleId, Language};

mod support;

#[tokio::test]
async fn article_page_renders_resolved_content() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/blog/sudoku-generation").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Sudoku generation"));
    assert!(resp.body.contains("<title>Sudoku generation | Carles Capellas</title>"));
    assert!(resp.body.contains("Posts timeline"));
    // Catalan variant link
    assert!(resp.body.contains(r#"href="/blog/sudoku-generation/ca""#));
}

#[tokio::test]
async fn every_article_renders_in_every_language() {
    let app = support::make_test_router();
    for id in ArticleId::ALL {
        let suffixes = std::iter::once(String::new())
            .chain(Language::ALL.iter().map(|language| format!("/{language}")));
        for suffix in suffixes {
            let uri = format!("/blog/{id}{suffix}");
            let resp = support::get(&app, &uri).await;
            assert_eq!(resp.status, StatusCode::OK, "{uri}");
            assert!(resp.location().is_none(), "{uri}");
            assert!(!resp.body.contains("Article not found"), "{uri}");
            assert!(resp.body.contains("Posts timeline"), "{uri}");
        }
    }
}

#[tokio::test]
async fn share_sentence_reaches_the_document_head() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/blog/express-on-google-cloud").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("<title>Running express on Google Cloud | Carles Capellas</title>"));
    assert!(resp.body.contains(
        r#"<meta property="og:description" content="Interested in cloud infrastructure?"#
    ));
    assert!(resp.body.contains(
        r#"<meta property="og:image" content="https://blog.test/images/blog/express-on-google-cloud/autoscaling.gif">"#
    ));
}

#[tokio::test]
async fn language_parameter_selects_the_translation() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/blog/sudoku-generation/ca").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Generació de sudokus"));

    // Undeclared language falls back to the article's first declared one.
    let resp = support::get(&app, "/blog/provinenca-desconeguda/en").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Provinença desconeguda"));
}

#[tokio::test]
async fn unknown_article_renders_not_found_section_without_redirect() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/blog/does-not-exist").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.location().is_none());
    assert!(resp.body.contains("Article not found"));
    assert!(resp.body.contains("app-container server-rendered"));
}

#[tokio::test]
async fn template_markers_are_substituted() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/blog").await;
    assert_eq!(resp.status, StatusCode::OK);

    assert!(!resp.body.contains(r#"<meta name="head-placeholder"/>"#));
    assert!(!resp.body.contains(r#"<div id="app-placeholder"/>"#));
    assert!(resp.body.contains(
        r#"<div id="app-placeholder"><div class="app-container server-rendered">"#
    ));
    assert!(resp.body.contains("<title>Blog | Carles Capellas</title>"));
    assert!(resp.body.contains(r#"<meta property="og:url" content="https://blog.test/blog">"#));
    // The rest of the template is untouched.
    assert!(resp.body.contains(r#"<script src="/main.js"></script>"#));
    assert!(resp.body.contains(r#"<link rel="stylesheet" href="/main.css" />"#));
}

#[tokio::test]
async fn rendering_is_idempotent() {
    let app = support::make_test_router();
    for uri in ["/blog", "/blog/webrtc", "/portfolio", "/error", "/blog/nope"] {
        let first = support::get(&app, uri).await;
        let second = support::get(&app, uri).await;
        assert_eq!(first.status, second.status, "{uri}");
        assert_eq!(first.body, second.body, "{uri}");
    }
}

#[tokio::test]
async fn blog_lists_the_selected_category() {
    let app = support::make_test_router();

    let tech = support::get(&app, "/blog").await;
    assert!(tech.body.contains("Sudoku generation"));
    assert!(!tech.body.contains("Provinença desconeguda"));
    assert!(tech.body.contains(r#"class="category selected-category" href="/blog?category=tech""#));

    let off_topic = support::get(&app, "/blog?category=off-topic").await;
    assert_eq!(off_topic.status, StatusCode::OK);
    assert!(off_topic.body.contains("Provinença desconeguda"));
    assert!(!off_topic.body.contains("Sudoku generation"));

    let bogus = support::get(&app, "/blog?category=gardening").await;
    assert_eq!(bogus.status, StatusCode::OK);
    assert_eq!(bogus.body, tech.body);
}

#[tokio::test]
async fn portfolio_links_hosted_demos_to_the_base_url() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/portfolio").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("<title>Portfolio | Carles Capellas</title>"));
    assert!(resp.body.contains(r#"href="https://blog.test/jokify/""#));
    assert!(resp.body.contains(r#"href="https://github.com/capelski/webjack""#));
    assert!(resp.body.contains("Personal page evolution"));
}

#[tokio::test]
async fn error_page_explains_the_failure() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/error").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Something went wrong"));
    assert!(resp.body.contains("<title>Carles Capellas</title>"));
}
