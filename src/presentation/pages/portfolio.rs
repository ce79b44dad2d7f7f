use maud::{Markup, PreEscaped, html};

use super::{AUTHOR, DocumentHead, PageProps, RenderedPage, layout};
use crate::application::dto::ProjectDto;
use crate::domain::portfolio::ProjectSection;
use crate::presentation::http::error::RenderResult;
use crate::presentation::routing::names;

/// # Errors
///
/// Fails when a route link cannot be generated.
pub fn render(props: &PageProps<'_>) -> RenderResult<RenderedPage> {
    let blog = props.routes.link(names::BLOG, &[])?;
    let own = props.routes.link(names::PORTFOLIO, &[])?;
    let base_url = &props.context.base_url;
    let portfolio = &props.services.portfolio_queries;

    let projects = portfolio.list_projects(ProjectSection::Projects, base_url);
    let evolution = portfolio.list_projects(ProjectSection::PersonalPageEvolution, base_url);

    let content = html! {
        h1 class="portfolio-title" { "Portfolio" }
        div class="projects" {
            @for project in &projects { (project_card(project)) }
        }
        h3 class="personal-page-evolution" { "Personal page evolution" }
        div class="projects" {
            @for project in &evolution { (project_card(project)) }
        }
    };

    Ok(RenderedPage {
        markup: layout::section("portfolio", &layout::nav_link(&blog, "⬅️ Blog"), &content),
        head: DocumentHead::new(
            format!("Portfolio | {AUTHOR}"),
            "The personal web projects I have developed on my free time",
            props.context.absolute(&own),
        ),
    })
}

fn project_card(project: &ProjectDto) -> Markup {
    html! {
        div class="project" {
            div class="project-info" {
                h3 class="project-title" { (project.title) }
                div class="project-details" {
                    @if let Some(date) = project.date {
                        span class="project-date" { "📅 " (date) }
                    }
                    @if let Some(repository) = &project.repository_url {
                        a class="project-source" target="_blank" href=(repository) { "⌨️ code" }
                    }
                }
            }
            div class={ "project-content " (project.image_orientation.as_str()) } {
                div class="project-image-wrapper" {
                    img src=(project.image_url) alt={ (project.title) " project" };
                    @if let Some(demo) = &project.demo_url {
                        a class="project-demo" target="_blank" href=(demo) { "▶️" }
                    }
                }
                div class="project-description" {
                    @for paragraph in project.description {
                        p { (PreEscaped(*paragraph)) }
                    }
                }
            }
        }
    }
}
