// src/presentation/pages/article.rs
use maud::{Markup, PreEscaped, html};

use super::{AUTHOR, DocumentHead, PageProps, RenderedPage, blog::details, layout};
use crate::application::dto::{ArticleDetailDto, ArticleLinkDto};
use crate::application::queries::articles::GetArticleQuery;
use crate::domain::article::Language;
use crate::presentation::http::error::RenderResult;
use crate::presentation::routing::{names, params};

/// Renders the article named by the `:articleId` parameter. An id that is not
/// in the registry renders an in-page "not found" section rather than failing.
///
/// # Errors
///
/// Fails on broken article content or an unresolvable route link; an
/// unknown id is not an error.
pub fn render(props: &PageProps<'_>) -> RenderResult<RenderedPage> {
    let id = props.params.get(params::ARTICLE_ID).unwrap_or_default();
    let blog = props.routes.link(names::BLOG, &[])?;
    let back = format!("{blog}?category={}", props.context.selected_category);
    let links = layout::nav_link(&back, "⬅️ Blog");

    let detail = props
        .services
        .article_queries
        .get_article(GetArticleQuery {
            id,
            language: props.context.selected_language,
        });
    let article = match detail {
        Ok(article) => article,
        Err(err) if err.is_not_found() => {
            tracing::debug!(article_id = id, "article not found");
            return Ok(not_found(props, &links, &blog));
        }
        Err(err) => return Err(err.into()),
    };

    let summary = &article.summary;
    let own = article_link(props, summary.id.as_str(), summary.language)?;
    let variants = summary
        .languages
        .iter()
        .filter(|language| **language != summary.language)
        .map(|language| -> RenderResult<(Language, String)> {
            Ok((*language, article_link(props, summary.id.as_str(), *language)?))
        })
        .collect::<RenderResult<Vec<_>>>()?;
    let posts = timeline(props, &article)?;

    let content = html! {
        div class="article" {
            div class="article-info" {
                h1 class="article-title" { (summary.title) }
                (details(summary))
                @if !variants.is_empty() {
                    div class="article-translations" {
                        @for (language, href) in &variants {
                            a class="article-translation" href=(href) hreflang=(language) {
                                (language.label())
                            }
                        }
                    }
                }
            }
            div class="article-body" {
                (PreEscaped(summary.introduction))
                (PreEscaped(article.body))
                (posts)
            }
        }
    };

    let mut head = DocumentHead::new(
        format!("{} | {AUTHOR}", summary.title),
        summary.description,
        props.context.absolute(&own),
    );
    if let Some(sentence) = article.share_sentence {
        head = head.with_share_text(sentence);
    }
    if let Some(image) = article.share_image {
        head = head.with_image(
            props
                .context
                .absolute(&format!("/images/blog/{}/{image}", summary.id)),
        );
    }

    Ok(RenderedPage {
        markup: layout::section("article", &links, &content),
        head,
    })
}

fn article_link(props: &PageProps<'_>, id: &str, language: Language) -> RenderResult<String> {
    Ok(props.routes.link(
        names::ARTICLE_LANGUAGE,
        &[(params::ARTICLE_ID, id), (params::LANGUAGE, language.as_str())],
    )?)
}

/// Links to the previous (older) and next (newer) posts.
fn timeline(props: &PageProps<'_>, article: &ArticleDetailDto) -> RenderResult<Markup> {
    let language = article.summary.language;
    let link = |neighbour: &Option<ArticleLinkDto>| -> RenderResult<Option<(String, &'static str)>> {
        neighbour
            .as_ref()
            .map(|n| -> RenderResult<(String, &'static str)> {
                Ok((article_link(props, n.id.as_str(), language)?, n.title))
            })
            .transpose()
    };
    let previous = link(&article.previous)?;
    let next = link(&article.next)?;

    Ok(html! {
        h3 class="posts-timeline" { "Posts timeline" }
        div class="article-links" {
            div class="previous-link" {
                @if let Some((href, title)) = &previous {
                    "⬅️ " a href=(href) { "Previous" }
                    div class="title-preview" { (title) }
                }
            }
            div class="next-link" {
                @if let Some((href, title)) = &next {
                    a href=(href) { "Following" } " ➡️"
                    div class="title-preview" { (title) }
                }
            }
        }
    })
}

fn not_found(props: &PageProps<'_>, links: &Markup, blog: &str) -> RenderedPage {
    let content = html! {
        div class="article-not-found" {
            h1 class="article-title" { "Article not found" }
            p {
                "The article you are looking for does not exist. Check out the "
                a href=(blog) { "latest posts" }
                " instead."
            }
        }
    };

    RenderedPage {
        markup: layout::section("article", links, &content),
        head: DocumentHead::new(
            format!("Article not found | {AUTHOR}"),
            "The requested article does not exist",
            props.context.absolute(blog),
        ),
    }
}
