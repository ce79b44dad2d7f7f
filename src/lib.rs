pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use std::sync::Arc;

use crate::application::services::ApplicationServices;
use crate::domain::errors::DomainResult;
use crate::infrastructure::content::{StaticArticleRegistry, StaticProjectCatalog};

/// Application services over the site's static content.
///
/// # Errors
///
/// Fails when the declared article content is incomplete.
pub fn site_services() -> DomainResult<ApplicationServices> {
    let registry = StaticArticleRegistry::site()?;
    Ok(ApplicationServices::new(
        Arc::new(registry),
        Arc::new(StaticProjectCatalog),
    ))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::application::services::ApplicationServices;
    use crate::presentation::routing::RouteTable;

    pub fn site_routes() -> RouteTable {
        RouteTable::site().expect("site routes are valid")
    }

    pub fn site_services() -> ApplicationServices {
        crate::site_services().expect("site content is complete")
    }
}
