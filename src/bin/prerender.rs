// src/bin/prerender.rs
use anyhow::{Context, Result};
use blogfolio::config::AppConfig;
use blogfolio::infrastructure::static_site::StaticSite;
use blogfolio::presentation::http::ssr::{RenderOutcome, render_document};
use blogfolio::presentation::routing::{Dispatcher, RequestTarget, RouteTable, names, params};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let out_dir = AppConfig::prerender_out_dir()?;

    let services = blogfolio::site_services()?;
    let routes = RouteTable::site()?;
    let site = StaticSite::new(config.static_dir());
    let template = site
        .read_template()
        .await
        .with_context(|| format!("reading {}", site.template_path().display()))?;

    let mut paths: Vec<String> = routes
        .routes()
        .iter()
        .filter(|route| route.param_names().next().is_none())
        .map(|route| route.path.to_string())
        .collect();
    for id in services.article_queries.article_ids() {
        paths.push(routes.link(names::ARTICLE, &[(params::ARTICLE_ID, id.as_str())])?);
    }

    let dispatcher = Dispatcher::new(&routes, &services, config.production_url_base());
    let mut written = 0_usize;
    for path in &paths {
        match render_document(&dispatcher, RequestTarget::path(path), &template)
            .with_context(|| format!("rendering {path}"))?
        {
            RenderOutcome::Page(document) => {
                write_page(&out_dir, path, &document).await?;
                written += 1;
            }
            RenderOutcome::Redirect(location) => {
                tracing::info!(%path, %location, "skipping redirecting route");
            }
        }
    }

    tracing::info!(pages = written, out_dir = %out_dir.display(), "prerender complete");
    Ok(())
}

async fn write_page(out_dir: &Path, path: &str, document: &str) -> Result<()> {
    let dir = out_dir.join(path.trim_start_matches('/'));
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("creating {}", dir.display()))?;
    let file = dir.join("index.html");
    tokio::fs::write(&file, document)
        .await
        .with_context(|| format!("writing {}", file.display()))?;
    tracing::debug!(file = %file.display(), "page written");
    Ok(())
}
