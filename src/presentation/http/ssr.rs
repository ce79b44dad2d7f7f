// src/presentation/http/ssr.rs
use std::convert::Infallible;
use std::panic::{AssertUnwindSafe, catch_unwind};

use axum::{
    Extension,
    body::Body,
    extract::{Query, Request},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::domain::article::ArticleCategory;
use crate::presentation::http::{
    error::{RenderError, RenderResult},
    state::HttpState,
    template,
};
use crate::presentation::pages;
use crate::presentation::routing::{Dispatch, Dispatcher, RequestTarget};

/// Outcome of one server render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The full HTML document.
    Page(String),
    /// Canonical path the client must be sent to instead.
    Redirect(String),
}

/// Dispatches `target`, renders the matched page and composes it into
/// `template`. A panicking page component surfaces as `RenderError::Panicked`.
///
/// # Errors
///
/// Any page component failure or panic, and a template without markers.
pub fn render_document(
    dispatcher: &Dispatcher<'_>,
    target: RequestTarget<'_>,
    template: &str,
) -> RenderResult<RenderOutcome> {
    let element = match dispatcher.dispatch(target) {
        Dispatch::Redirect(location) => return Ok(RenderOutcome::Redirect(location)),
        Dispatch::Render(element) => element,
    };

    let page = catch_unwind(AssertUnwindSafe(|| element.render()))
        .map_err(|payload| RenderError::from_panic(payload.as_ref()))??;

    let app = pages::app(&page.markup).into_string();
    let head = page.head.render().into_string();
    template::compose(template, &app, &head).map(RenderOutcome::Page)
}

#[derive(Debug, Deserialize)]
struct CategoryQuery {
    category: Option<ArticleCategory>,
}

/// Server Render Bootstrap: answers with the rendered page, a permanent
/// redirect, or the untouched template when anything goes wrong.
pub async fn server_renderer(Extension(state): Extension<HttpState>, request: Request) -> Response {
    let template = match state.site.read_template().await {
        Ok(template) => template,
        Err(err) => {
            tracing::error!(
                error = %err,
                template = %state.site.template_path().display(),
                "failed to read page template"
            );
            return serve_raw(&state, request).await;
        }
    };

    let path = request.uri().path().to_owned();
    // An unparsable category is ignored rather than rejected.
    let category = Query::<CategoryQuery>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(query)| query.category);
    let target = RequestTarget {
        path: &path,
        category,
    };

    let outcome = render_document(&state.dispatcher(), target, &template);
    match outcome {
        Ok(RenderOutcome::Page(document)) => {
            tracing::debug!(%path, "served server-rendered page");
            Html(document).into_response()
        }
        Ok(RenderOutcome::Redirect(location)) => {
            tracing::debug!(%path, %location, "redirecting");
            permanent_redirect(&location)
        }
        Err(err) => {
            tracing::error!(error = %err, %path, "server rendering failed, serving raw template");
            serve_raw(&state, request).await
        }
    }
}

fn permanent_redirect(location: &str) -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location.to_owned())]).into_response()
}

async fn serve_raw(state: &HttpState, request: Request) -> Response {
    let result: Result<_, Infallible> = ServeFile::new(state.site.template_path())
        .oneshot(request)
        .await;
    match result {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}
