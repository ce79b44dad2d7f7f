// src/presentation/routing/route.rs
use std::collections::BTreeMap;

use regex::Regex;
use thiserror::Error;

use crate::presentation::pages::{self, PageComponent};

pub mod names {
    pub const ARTICLE: &str = "article";
    pub const ARTICLE_LANGUAGE: &str = "article-language";
    pub const BLOG: &str = "blog";
    pub const ERROR: &str = "error";
    pub const PORTFOLIO: &str = "portfolio";
}

pub mod params {
    pub const ARTICLE_ID: &str = "articleId";
    pub const LANGUAGE: &str = "language";
}

const SAMPLE_PARAM_VALUE: &str = "sample";

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route {name}: invalid pattern: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("route {name}: pattern does not accept its own path {generated}")]
    Inconsistent {
        name: &'static str,
        generated: String,
    },
    #[error("route table has no {0} route")]
    Missing(&'static str),
    #[error("no route named {0}")]
    Unknown(String),
    #[error("route {name}: missing value for :{param}")]
    MissingParam {
        name: &'static str,
        param: &'static str,
    },
}

/// Parameters captured from the `:name` segments of a route path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<&'static str, String>);

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A navigable URL shape: `path` generates links, `pattern` matches requests.
#[derive(Debug, Clone)]
pub struct ComponentRoute {
    pub name: &'static str,
    pub path: &'static str,
    pattern: Regex,
    pub component: PageComponent,
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.trim_end_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
}

impl ComponentRoute {
    /// # Errors
    ///
    /// `RouteError::Pattern` when `pattern` is not a valid regex.
    pub fn new(
        name: &'static str,
        path: &'static str,
        pattern: &str,
        component: PageComponent,
    ) -> Result<Self, RouteError> {
        let pattern = Regex::new(pattern).map_err(|source| RouteError::Pattern { name, source })?;
        Ok(Self {
            name,
            path,
            pattern,
            component,
        })
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }

    /// Names of the `:name` placeholders, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &'static str> {
        segments(self.path).filter_map(|segment| segment.strip_prefix(':'))
    }

    /// Aligns the path template with a request path the pattern matched.
    #[must_use]
    pub fn params(&self, request_path: &str) -> RouteParams {
        RouteParams(
            segments(self.path)
                .zip(segments(request_path))
                .filter_map(|(template, actual)| {
                    template
                        .strip_prefix(':')
                        .map(|name| (name, actual.to_string()))
                })
                .collect(),
        )
    }

    /// Substitutes every placeholder of `path`.
    ///
    /// # Errors
    ///
    /// `RouteError::MissingParam` when `values` lacks a placeholder of `path`.
    pub fn link(&self, values: &[(&str, &str)]) -> Result<String, RouteError> {
        let mut link = String::new();
        for segment in segments(self.path) {
            link.push('/');
            match segment.strip_prefix(':') {
                Some(param) => {
                    let value = values
                        .iter()
                        .find(|(name, _)| *name == param)
                        .map(|(_, value)| *value)
                        .ok_or(RouteError::MissingParam {
                            name: self.name,
                            param,
                        })?;
                    link.push_str(value);
                }
                None => link.push_str(segment),
            }
        }
        if link.is_empty() {
            link.push('/');
        }
        Ok(link)
    }

    fn sample_link(&self) -> String {
        let values: Vec<_> = self
            .param_names()
            .map(|name| (name, SAMPLE_PARAM_VALUE))
            .collect();
        self.link(&values).unwrap_or_else(|_| self.path.to_string())
    }
}

/// Ordered route list; the first matching pattern wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<ComponentRoute>,
    home_redirect: String,
    miss_redirect: String,
}

impl RouteTable {
    /// Requires a blog and an error route, and every pattern to accept the
    /// links its own path generates.
    ///
    /// # Errors
    ///
    /// `Inconsistent` when a pattern rejects its own sample link, `Missing`
    /// when the blog or error route is absent.
    pub fn new(routes: Vec<ComponentRoute>) -> Result<Self, RouteError> {
        for route in &routes {
            let generated = route.sample_link();
            if !route.matches(&generated) {
                return Err(RouteError::Inconsistent {
                    name: route.name,
                    generated,
                });
            }
        }

        let path_of = |name: &'static str| {
            routes
                .iter()
                .find(|route| route.name == name)
                .map(|route| route.path.to_string())
                .ok_or(RouteError::Missing(name))
        };
        let home_redirect = path_of(names::BLOG)?;
        let miss_redirect = path_of(names::ERROR)?;

        Ok(Self {
            routes,
            home_redirect,
            miss_redirect,
        })
    }

    /// # Errors
    ///
    /// Fails when a site route is malformed; see [`Self::new`].
    pub fn site() -> Result<Self, RouteError> {
        Self::new(vec![
            ComponentRoute::new(
                names::ARTICLE,
                "/blog/:articleId",
                r"^/blog/[^/]+/?$",
                pages::article::render,
            )?,
            ComponentRoute::new(
                names::ARTICLE_LANGUAGE,
                "/blog/:articleId/:language",
                r"^/blog/[^/]+/[^/]+/?$",
                pages::article::render,
            )?,
            ComponentRoute::new(names::BLOG, "/blog", r"^/blog/?$", pages::blog::render)?,
            ComponentRoute::new(names::ERROR, "/error", r"^/error/?$", pages::error::render)?,
            ComponentRoute::new(
                names::PORTFOLIO,
                "/portfolio",
                r"^/portfolio/?$",
                pages::portfolio::render,
            )?,
        ])
    }

    #[must_use]
    pub fn routes(&self) -> &[ComponentRoute] {
        &self.routes
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ComponentRoute> {
        self.routes.iter().find(|route| route.name == name)
    }

    #[must_use]
    pub fn find(&self, path: &str) -> Option<&ComponentRoute> {
        self.routes.iter().find(|route| route.matches(path))
    }

    /// # Errors
    ///
    /// `RouteError::Unknown` for an unregistered name, otherwise as
    /// [`ComponentRoute::link`].
    pub fn link(&self, name: &str, values: &[(&str, &str)]) -> Result<String, RouteError> {
        self.get(name)
            .ok_or_else(|| RouteError::Unknown(name.to_string()))?
            .link(values)
    }

    /// Where requests for `/` are sent.
    #[must_use]
    pub fn home_redirect(&self) -> &str {
        &self.home_redirect
    }

    /// Where requests matching no route are sent.
    #[must_use]
    pub fn miss_redirect(&self) -> &str {
        &self.miss_redirect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::site().expect("site routes are valid")
    }

    #[test]
    fn first_declared_match_wins() {
        let table = table();
        assert_eq!(table.find("/blog/webrtc").map(|r| r.name), Some(names::ARTICLE));
        assert_eq!(table.find("/blog/webrtc/").map(|r| r.name), Some(names::ARTICLE));
        assert_eq!(
            table.find("/blog/webrtc/ca").map(|r| r.name),
            Some(names::ARTICLE_LANGUAGE)
        );
        assert_eq!(table.find("/blog").map(|r| r.name), Some(names::BLOG));
        assert_eq!(table.find("/blog/").map(|r| r.name), Some(names::BLOG));
        assert_eq!(table.find("/portfolio/").map(|r| r.name), Some(names::PORTFOLIO));
        assert_eq!(table.find("/error").map(|r| r.name), Some(names::ERROR));
    }

    #[test]
    fn unmatched_paths() {
        let table = table();
        for path in ["/", "/blogs", "/blog/a/b/c", "/portfolio/x", "/errors", ""] {
            assert!(table.find(path).is_none(), "{path} should not match");
        }
    }

    #[test]
    fn generated_links_match_their_pattern() {
        let table = table();
        for route in table.routes() {
            for value in ["sudoku-generation", "x", "ca", "a-b-c"] {
                let values: Vec<_> = route.param_names().map(|n| (n, value)).collect();
                let link = route.link(&values).unwrap();
                assert!(route.matches(&link), "{} rejects {link}", route.name);
                assert_eq!(table.find(&link).map(|r| r.name), Some(route.name));
            }
        }
    }

    #[test]
    fn extracts_params_by_segment() {
        let table = table();
        let route = table.get(names::ARTICLE_LANGUAGE).unwrap();
        let params = route.params("/blog/sudoku-generation/ca/");
        assert_eq!(params.get(params::ARTICLE_ID), Some("sudoku-generation"));
        assert_eq!(params.get(params::LANGUAGE), Some("ca"));
        assert!(table.get(names::BLOG).unwrap().params("/blog").is_empty());
    }

    #[test]
    fn link_requires_every_param() {
        let table = table();
        assert_eq!(
            table.link(names::ARTICLE, &[(params::ARTICLE_ID, "webrtc")]).unwrap(),
            "/blog/webrtc"
        );
        assert!(matches!(
            table.link(names::ARTICLE, &[]),
            Err(RouteError::MissingParam { .. })
        ));
        assert!(matches!(table.link("nope", &[]), Err(RouteError::Unknown(_))));
    }

    #[test]
    fn rejects_inconsistent_or_incomplete_tables() {
        let inconsistent = ComponentRoute::new(
            names::BLOG,
            "/blog/:articleId",
            r"^/blog/?$",
            pages::blog::render,
        )
        .unwrap();
        assert!(matches!(
            RouteTable::new(vec![inconsistent]),
            Err(RouteError::Inconsistent { .. })
        ));

        let blog_only =
            ComponentRoute::new(names::BLOG, "/blog", r"^/blog/?$", pages::blog::render).unwrap();
        assert!(matches!(
            RouteTable::new(vec![blog_only]),
            Err(RouteError::Missing(names::ERROR))
        ));

        assert!(matches!(
            ComponentRoute::new(names::BLOG, "/blog", r"^/blog(", pages::blog::render),
            Err(RouteError::Pattern { .. })
        ));
    }

    #[test]
    fn redirect_targets_are_canonical_paths() {
        let table = table();
        assert_eq!(table.home_redirect(), "/blog");
        assert_eq!(table.miss_redirect(), "/error");
    }
}
