// src/presentation/routing/dispatcher.rs
use crate::application::services::ApplicationServices;
use crate::domain::article::{ArticleCategory, Language};
use crate::presentation::http::error::RenderResult;
use crate::presentation::pages::{PageProps, RenderedPage};
use crate::presentation::routing::{
    context::RenderContext,
    route::{ComponentRoute, RouteTable, params},
};

/// What the dispatcher needs to know about an incoming request.
#[derive(Debug, Clone, Copy)]
pub struct RequestTarget<'r> {
    pub path: &'r str,
    /// Category picked through the `?category=` query, if any.
    pub category: Option<ArticleCategory>,
}

impl<'r> RequestTarget<'r> {
    #[must_use]
    pub const fn path(path: &'r str) -> Self {
        Self {
            path,
            category: None,
        }
    }
}

/// A matched route bound to the props it will be rendered with.
pub struct PageElement<'a> {
    route: &'a ComponentRoute,
    props: PageProps<'a>,
}

impl PageElement<'_> {
    #[must_use]
    pub const fn route_name(&self) -> &'static str {
        self.route.name
    }

    #[must_use]
    pub const fn props(&self) -> &PageProps<'_> {
        &self.props
    }

    /// # Errors
    ///
    /// Whatever the matched page component fails with.
    pub fn render(&self) -> RenderResult<RenderedPage> {
        (self.route.component)(&self.props)
    }
}

pub enum Dispatch<'a> {
    Render(PageElement<'a>),
    /// Out-of-band instruction for the HTTP layer; never rendered as markup.
    Redirect(String),
}

pub struct Dispatcher<'a> {
    routes: &'a RouteTable,
    services: &'a ApplicationServices,
    base_url: &'a str,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub const fn new(
        routes: &'a RouteTable,
        services: &'a ApplicationServices,
        base_url: &'a str,
    ) -> Self {
        Self {
            routes,
            services,
            base_url,
        }
    }

    #[must_use]
    pub fn dispatch(&self, target: RequestTarget<'_>) -> Dispatch<'a> {
        let Some(route) = self.routes.find(target.path) else {
            let redirect = if target.path == "/" {
                self.routes.home_redirect()
            } else {
                self.routes.miss_redirect()
            };
            return Dispatch::Redirect(redirect.to_string());
        };

        let route_params = route.params(target.path);
        let selected_language = route_params
            .get(params::LANGUAGE)
            .and_then(|value| value.parse::<Language>().ok())
            .unwrap_or_default();
        let selected_category = target
            .category
            .or_else(|| {
                route_params
                    .get(params::ARTICLE_ID)
                    .and_then(|id| self.services.article_queries.category_of(id))
            })
            .unwrap_or_default();

        Dispatch::Render(PageElement {
            route,
            props: PageProps {
                params: route_params,
                context: RenderContext {
                    selected_category,
                    selected_language,
                    base_url: self.base_url.to_string(),
                },
                services: self.services,
                routes: self.routes,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::routing::route::names;
    use crate::test_support::{site_routes, site_services};

    const BASE: &str = "https://example.org";

    #[test]
    fn root_redirects_to_blog() {
        let (routes, services) = (site_routes(), site_services());
        let dispatcher = Dispatcher::new(&routes, &services, BASE);
        assert!(matches!(
            dispatcher.dispatch(RequestTarget::path("/")),
            Dispatch::Redirect(target) if target == "/blog"
        ));
    }

    #[test]
    fn unmatched_paths_redirect_to_error() {
        let (routes, services) = (site_routes(), site_services());
        let dispatcher = Dispatcher::new(&routes, &services, BASE);
        for path in ["/nope", "/blog/a/b/c", "/portfolio/extra", "//"] {
            assert!(
                matches!(
                    dispatcher.dispatch(RequestTarget::path(path)),
                    Dispatch::Redirect(target) if target == "/error"
                ),
                "{path}"
            );
        }
    }

    #[test]
    fn article_route_carries_id_language_and_category() {
        let (routes, services) = (site_routes(), site_services());
        let dispatcher = Dispatcher::new(&routes, &services, BASE);

        let Dispatch::Render(element) =
            dispatcher.dispatch(RequestTarget::path("/blog/provinenca-desconeguda/ca"))
        else {
            panic!("article path must render");
        };
        assert_eq!(element.route_name(), names::ARTICLE_LANGUAGE);
        let props = element.props();
        assert_eq!(props.params.get(params::ARTICLE_ID), Some("provinenca-desconeguda"));
        assert_eq!(props.context.selected_language, Language::Ca);
        assert_eq!(props.context.selected_category, ArticleCategory::OffTopic);
        assert_eq!(props.context.base_url, BASE);
    }

    #[test]
    fn invalid_or_missing_language_falls_back_to_default() {
        let (routes, services) = (site_routes(), site_services());
        let dispatcher = Dispatcher::new(&routes, &services, BASE);
        for path in ["/blog/webrtc", "/blog/webrtc/klingon"] {
            let Dispatch::Render(element) = dispatcher.dispatch(RequestTarget::path(path)) else {
                panic!("{path} must render");
            };
            assert_eq!(element.props().context.selected_language, Language::En);
        }
    }

    #[test]
    fn explicit_category_wins_and_unknown_article_is_not_a_routing_failure() {
        let (routes, services) = (site_routes(), site_services());
        let dispatcher = Dispatcher::new(&routes, &services, BASE);

        let Dispatch::Render(element) = dispatcher.dispatch(RequestTarget {
            path: "/blog",
            category: Some(ArticleCategory::OffTopic),
        }) else {
            panic!("blog must render");
        };
        assert_eq!(element.props().context.selected_category, ArticleCategory::OffTopic);

        let Dispatch::Render(element) =
            dispatcher.dispatch(RequestTarget::path("/blog/does-not-exist"))
        else {
            panic!("unknown article ids still match the article route");
        };
        assert_eq!(element.route_name(), names::ARTICLE);
        assert_eq!(element.props().context.selected_category, ArticleCategory::Tech);
    }
}
