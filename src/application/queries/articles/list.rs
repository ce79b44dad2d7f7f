use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleSummaryDto, error::ApplicationResult},
    domain::article::{Article, ArticleCategory, ArticleId, Language},
};

#[derive(Debug, Clone, Copy)]
pub struct ListArticlesQuery {
    pub category: ArticleCategory,
    pub language: Language,
}

impl ArticleQueryService {
    /// Summaries of one category in display order. Each summary is localized
    /// to the requested language when the article supports it.
    ///
    /// # Errors
    ///
    /// Returns a domain error when an article has no content for the
    /// language it resolves to.
    pub fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        self.read_repo
            .filter_by_category(query.category)
            .into_iter()
            .map(|article| -> ApplicationResult<ArticleSummaryDto> {
                let (language, content) = article.localized(query.language)?;
                Ok(ArticleSummaryDto::new(&article.metadata, language, content))
            })
            .collect()
    }

    /// Every article id in display order.
    #[must_use]
    pub fn article_ids(&self) -> Vec<ArticleId> {
        self.read_repo.get_all().iter().map(Article::id).collect()
    }
}
