// src/presentation/http/template.rs
use crate::presentation::http::error::{RenderError, RenderResult};

/// Empty element the rendered application is injected into.
pub const APP_MARKER: &str = r#"<div id="app-placeholder"/>"#;
/// Empty element replaced by the page's `<head>` tags.
pub const HEAD_MARKER: &str = r#"<meta name="head-placeholder"/>"#;

fn locate(template: &str, marker: &'static str) -> RenderResult<usize> {
    template
        .find(marker)
        .ok_or_else(|| RenderError::template(format!("template has no {marker} marker")))
}

/// Injects the application markup and the head tags into the template. Both
/// markers are located in the original template, so rendered content that
/// happens to contain a marker string is never substituted again.
///
/// # Errors
///
/// `RenderError::Template` when either marker is missing.
pub fn compose(template: &str, app_html: &str, head_html: &str) -> RenderResult<String> {
    let app_at = locate(template, APP_MARKER)?;
    let head_at = locate(template, HEAD_MARKER)?;

    let app = format!(r#"<div id="app-placeholder">{app_html}</div>"#);
    let mut splices = [
        (app_at, APP_MARKER.len(), app),
        (head_at, HEAD_MARKER.len(), head_html.to_string()),
    ];
    splices.sort_by_key(|(at, _, _)| *at);

    let mut page = String::with_capacity(template.len() + app_html.len() + head_html.len() + 32);
    let mut cursor = 0;
    for (at, len, replacement) in splices {
        page.push_str(&template[cursor..at]);
        page.push_str(&replacement);
        cursor = at + len;
    }
    page.push_str(&template[cursor..]);
    Ok(page)
}
