// src/presentation/pages/blog.rs
use maud::{Markup, PreEscaped, html};

use super::{AUTHOR, DocumentHead, PageProps, RenderedPage, layout};
use crate::application::dto::ArticleSummaryDto;
use crate::application::queries::articles::ListArticlesQuery;
use crate::domain::article::ArticleCategory;
use crate::presentation::http::error::RenderResult;
use crate::presentation::routing::{names, params};

/// # Errors
///
/// Fails when a listed article cannot be localized or a route link
/// cannot be generated.
pub fn render(props: &PageProps<'_>) -> RenderResult<RenderedPage> {
    let selected = props.context.selected_category;
    let blog = props.routes.link(names::BLOG, &[])?;
    let portfolio = props.routes.link(names::PORTFOLIO, &[])?;

    let articles = props
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            category: selected,
            language: props.context.selected_language,
        })?;
    let previews = articles
        .iter()
        .map(|summary| preview(props, summary))
        .collect::<RenderResult<Vec<_>>>()?;

    let content = html! {
        div class="blog-header" {
            h1 class="blog-title" { "Blog" }
            div class="blog-categories" {
                @for category in ArticleCategory::ALL {
                    a.category.selected-category[category == selected]
                        href={ (blog) "?category=" (category) } { (category) }
                }
            }
        }
        div class="articles" {
            @for preview in &previews { (preview) }
        }
    };

    let mut own = blog;
    if selected != ArticleCategory::default() {
        own = format!("{own}?category={selected}");
    }

    Ok(RenderedPage {
        markup: layout::section(
            "blog",
            &layout::nav_link(&portfolio, "Portfolio ➡️"),
            &content,
        ),
        head: DocumentHead::new(
            format!("Blog | {AUTHOR}"),
            "Blog with software development entries and other random thoughts that cross my mind",
            props.context.absolute(&own),
        ),
    })
}

fn preview(props: &PageProps<'_>, summary: &ArticleSummaryDto) -> RenderResult<Markup> {
    let href = props.routes.link(
        names::ARTICLE_LANGUAGE,
        &[
            (params::ARTICLE_ID, summary.id.as_str()),
            (params::LANGUAGE, summary.language.as_str()),
        ],
    )?;

    Ok(html! {
        div class="article preview-mode" {
            div class="article-info" {
                h3 class="article-title" {
                    a href=(href) { (summary.title) }
                }
                (details(summary))
            }
            div class="article-body" {
                (PreEscaped(summary.introduction))
                a class="read-more" href=(href) { "Read more" }
            }
        }
    })
}

/// Date, reading time and available languages.
pub(super) fn details(summary: &ArticleSummaryDto) -> Markup {
    html! {
        div class="article-details" {
            span class="article-date" { "📅 " (summary.date) }
            span class="article-duration" { "🕐 " (summary.duration) " mins" }
            @for language in &summary.languages {
                span class="article-language" { "🌎 " (language) }
            }
        }
    }
}
