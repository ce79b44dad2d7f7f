// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::{articles::ArticleQueryService, portfolio::PortfolioQueryService},
    domain::{article::ArticleReadRepository, portfolio::ProjectRepository},
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub portfolio_queries: Arc<PortfolioQueryService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        project_repo: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            article_queries: Arc::new(ArticleQueryService::new(article_repo)),
            portfolio_queries: Arc::new(PortfolioQueryService::new(project_repo)),
        }
    }
}
