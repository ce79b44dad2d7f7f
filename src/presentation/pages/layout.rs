use maud::{Markup, html};

/// Root wrapper of every server-rendered page.
#[must_use]
pub fn app(page: &Markup) -> Markup {
    html! {
        div class="app-container server-rendered" { (page) }
    }
}

pub(super) fn section(name: &str, links: &Markup, content: &Markup) -> Markup {
    html! {
        div class={ "section-container " (name) "-section" } {
            div class="links" { (links) }
            div class="section-content" { (content) }
        }
    }
}

pub(super) fn nav_link(href: &str, label: &str) -> Markup {
    html! {
        a class="link" href=(href) { (label) }
    }
}
