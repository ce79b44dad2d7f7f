use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailDto, ArticleLinkDto, ArticleSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleCategory, ArticleId, Language},
};

#[derive(Debug, Clone, Copy)]
pub struct GetArticleQuery<'a> {
    /// Raw URL segment; not necessarily a known id.
    pub id: &'a str,
    pub language: Language,
}

impl ArticleQueryService {
    /// # Errors
    ///
    /// `NotFound` when the id is unknown or not published, a domain error
    /// when the resolved language has no content.
    pub fn get_article(&self, query: GetArticleQuery<'_>) -> ApplicationResult<ArticleDetailDto> {
        let id: ArticleId = query.id.parse()?;
        let article = self
            .read_repo
            .find_by_id(id)
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} is not published")))?;

        let (language, content) = article.localized(query.language)?;
        let neighbours = self.read_repo.find_neighbours(id);

        Ok(ArticleDetailDto {
            summary: ArticleSummaryDto::new(&article.metadata, language, content),
            share_sentence: content.share_sentence,
            share_image: article.metadata.share_image,
            body: content.body,
            previous: neighbours
                .previous
                .and_then(|a| ArticleLinkDto::resolve(a, language)),
            next: neighbours
                .next
                .and_then(|a| ArticleLinkDto::resolve(a, language)),
        })
    }

    /// Category of the article behind a raw URL segment, if it is published.
    #[must_use]
    pub fn category_of(&self, id: &str) -> Option<ArticleCategory> {
        let id: ArticleId = id.parse().ok()?;
        self.read_repo
            .find_by_id(id)
            .map(|article| article.metadata.category)
    }
}
