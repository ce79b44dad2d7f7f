use maud::html;

use super::{AUTHOR, DocumentHead, PageProps, RenderedPage, layout};
use crate::presentation::http::error::RenderResult;
use crate::presentation::routing::names;

/// # Errors
///
/// Fails when a route link cannot be generated.
pub fn render(props: &PageProps<'_>) -> RenderResult<RenderedPage> {
    let blog = props.routes.link(names::BLOG, &[])?;
    let portfolio = props.routes.link(names::PORTFOLIO, &[])?;
    let own = props.routes.link(names::ERROR, &[])?;

    let links = html! {
        (layout::nav_link(&blog, "⬅️ Blog"))
        (layout::nav_link(&portfolio, "Portfolio ➡️"))
    };
    let content = html! {
        h1 class="error-title" { "Something went wrong" }
        img class="error-image" src="/images/shrug.png" alt="Shrug meme";
    };

    Ok(RenderedPage {
        markup: layout::section("error", &links, &content),
        head: DocumentHead::new(
            AUTHOR,
            "Something went wrong... You are not supposed to be here",
            props.context.absolute(&own),
        ),
    })
}
